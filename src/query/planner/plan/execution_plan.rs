//! 执行计划
//!
//! 持有计划ID与根节点句柄。节点归对象池所有，销毁计划不会释放节点。

use super::core::{next_plan_id, NodeRef, PlanDescription, PlanNodePool};
use crate::core::error::{DBError, DBResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionPlan {
    id: i64,
    root: Option<NodeRef>,
}

impl ExecutionPlan {
    pub fn new(root: Option<NodeRef>) -> Self {
        Self {
            id: next_plan_id(),
            root,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn root(&self) -> Option<NodeRef> {
        self.root
    }

    pub fn set_root(&mut self, root: NodeRef) {
        self.root = Some(root);
    }

    /// 从根节点沿输入链收集节点句柄，根在前
    pub fn chain(&self, pool: &PlanNodePool) -> DBResult<Vec<NodeRef>> {
        let mut chain = Vec::new();
        let mut cur = self.root;
        while let Some(r) = cur {
            if chain.len() > pool.len() {
                return Err(DBError::Plan(format!("计划 {} 中存在环", self.id)));
            }
            let node = pool
                .get(r)
                .ok_or_else(|| DBError::Plan(format!("无效的计划节点句柄 {}", r)))?;
            chain.push(r);
            cur = node.input();
        }
        Ok(chain)
    }

    /// 生成整个计划的描述
    pub fn describe(&self, pool: &PlanNodePool) -> DBResult<PlanDescription> {
        let mut plan_desc = PlanDescription::new(self.id);
        for r in self.chain(pool)? {
            let node = pool
                .get(r)
                .ok_or_else(|| DBError::Plan(format!("无效的计划节点句柄 {}", r)))?;
            let mut desc = node.explain();
            if let Some(dep) = node.input().and_then(|i| pool.get(i)) {
                desc.dependencies.push(dep.id());
            }
            plan_desc.add_node_desc(desc);
        }
        Ok(plan_desc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::planner::plan::core::{DropIndexNode, PlanNodeEnum, StartNode};

    #[test]
    fn test_plan_ids_unique() {
        let a = ExecutionPlan::new(None);
        let b = ExecutionPlan::new(None);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_describe_chain() {
        let mut pool = PlanNodePool::new();
        let start = PlanNodeEnum::Start(StartNode::new()).make(&mut pool);
        let drop = PlanNodeEnum::DropEdgeIndex(DropIndexNode::new(Some(start), "like_idx", true))
            .make(&mut pool);
        let plan = ExecutionPlan::new(Some(drop));

        let desc = plan.describe(&pool).expect("describe");
        assert_eq!(desc.plan_id, plan.id());
        assert_eq!(desc.plan_node_descs.len(), 2);

        let root = &desc.plan_node_descs[0];
        assert_eq!(root.name, "DropEdgeIndex");
        assert_eq!(root.get("indexName"), Some("like_idx"));
        assert_eq!(root.get("ifExists"), Some("true"));

        let start_id = pool.get(start).map(|n| n.id()).expect("start node");
        assert_eq!(root.dependencies, vec![start_id]);
        assert_eq!(desc.get_node_desc(start_id).map(|d| d.name.as_str()), Some("Start"));

        let json = desc.to_json().expect("json");
        assert!(json.contains("DropEdgeIndex"));
    }

    #[test]
    fn test_empty_plan() {
        let pool = PlanNodePool::new();
        let plan = ExecutionPlan::new(None);
        let desc = plan.describe(&pool).expect("describe");
        assert!(desc.plan_node_descs.is_empty());
    }

    #[test]
    fn test_dangling_root() {
        let mut other = PlanNodePool::new();
        let r = PlanNodeEnum::Start(StartNode::new()).make(&mut other);
        let plan = ExecutionPlan::new(Some(r));
        let err = plan.describe(&PlanNodePool::new()).expect_err("dangling");
        assert!(matches!(err, DBError::Plan(_)));
    }
}

//! 过滤执行器
//!
//! 条件已下推到存储层，这里只把输入变量的最新结果转交给自身的输出变量

use async_trait::async_trait;
use std::sync::Arc;

use crate::core::error::{DBError, DBResult};
use crate::query::context::QueryContext;
use crate::query::executor::base::{BaseExecutor, Executor};
use crate::query::planner::plan::{FilterNode, PlanNode, PlanNodeEnum};

#[derive(Debug)]
pub struct FilterExecutor {
    base: BaseExecutor,
    node: FilterNode,
}

impl FilterExecutor {
    pub fn new(node: FilterNode, qctx: Arc<QueryContext>) -> Self {
        let plan_node = PlanNodeEnum::Filter(node.clone());
        Self {
            base: BaseExecutor::new("FilterExecutor", plan_node, qctx),
            node,
        }
    }
}

#[async_trait]
impl Executor for FilterExecutor {
    async fn execute(&mut self) -> DBResult<()> {
        let qctx = self.base.qctx().clone();
        let input = self
            .node
            .input()
            .ok_or_else(|| DBError::Plan("Filter 节点缺少输入".to_string()))?;
        let input_var = qctx.node(input)?.output_var().to_string();
        let result = qctx.get_result(&input_var).ok_or_else(|| {
            DBError::Execution(format!("变量 `{}' 尚无结果", input_var))
        })?;
        log::trace!(
            "Filter {} forwards `{}' with condition {}",
            self.node.id(),
            input_var,
            self.node.condition()
        );
        self.base.finish(result)
    }

    fn base(&self) -> &BaseExecutor {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseExecutor {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QueryConfig;
    use crate::core::{DataSet, Expression, ResultBuilder, Value};
    use crate::query::context::{RequestContext, Session};
    use crate::query::planner::plan::{ExecutionPlan, PlanNodePool, StartNode};
    use crate::storage::metadata::MemoryMetaClient;

    fn condition() -> Expression {
        Expression::gt(
            Expression::edge_property("like", "likeness"),
            Expression::constant(Value::Int(90)),
        )
    }

    fn setup() -> (Arc<QueryContext>, FilterNode, String) {
        let mut pool = PlanNodePool::new();
        let start = PlanNodeEnum::Start(StartNode::new()).make(&mut pool);
        let start_var = pool
            .get(start)
            .map(|n| n.output_var().to_string())
            .expect("start node");
        let mut filter = FilterNode::new(Some(start), condition());
        filter.set_output_var("filtered".to_string());
        let qctx = QueryContext::new(
            RequestContext::new(Session::new(1), ""),
            Arc::new(MemoryMetaClient::new()),
            QueryConfig::default(),
            pool,
            ExecutionPlan::new(Some(start)),
        );
        (Arc::new(qctx), filter, start_var)
    }

    #[tokio::test]
    async fn test_filter_forwards_input() {
        let (qctx, node, start_var) = setup();
        let mut ds = DataSet::with_columns(["likeness"]);
        ds.add_row(vec![Value::Int(95)]);
        qctx.set_result(&start_var, ResultBuilder::new().value(ds.clone()).finish());

        let mut exec = FilterExecutor::new(node, qctx.clone());
        exec.execute().await.expect("filter");

        let result = qctx.get_result("filtered").expect("filter result");
        assert_eq!(result.value(), &Value::DataSet(ds));
        assert_eq!(exec.stats().num_rows, 1);
    }

    #[tokio::test]
    async fn test_filter_without_input_result() {
        let (qctx, node, _) = setup();
        let mut exec = FilterExecutor::new(node, qctx);
        assert!(matches!(
            exec.execute().await,
            Err(DBError::Execution(_))
        ));
    }

    #[tokio::test]
    async fn test_filter_without_input_node() {
        let (qctx, _, _) = setup();
        let mut exec = FilterExecutor::new(FilterNode::new(None, condition()), qctx);
        assert!(matches!(exec.execute().await, Err(DBError::Plan(_))));
    }
}

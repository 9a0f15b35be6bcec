//! 过滤条件下推
//!
//! 把以裸标签书写的过滤条件改写到边或起点的作用域下，再挂到 `Filter` 节点上

use crate::core::error::{DBError, DBResult};
use crate::core::Expression;
use crate::query::planner::plan::{FilterNode, NodeRef, PlanNodeEnum, PlanNodePool};
use crate::query::visitor::rewrite_sym_expr;

#[derive(Debug, Default)]
pub struct FilterPlanner;

impl FilterPlanner {
    pub fn new() -> Self {
        Self
    }

    /// 改写条件并在 `input` 之上创建 `Filter` 节点
    ///
    /// 条件中含有无法在该作用域下推的子表达式时返回 `DBError::Plan`，
    /// 此时对象池不会新增节点
    pub fn push_down(
        &self,
        input: NodeRef,
        condition: Expression,
        sym: &str,
        is_edge: bool,
        pool: &mut PlanNodePool,
    ) -> DBResult<NodeRef> {
        let original = condition.to_string();
        let rewritten = rewrite_sym_expr(condition, sym, is_edge).ok_or_else(|| {
            DBError::Plan(format!("条件 `{}' 无法下推到 `{}'", original, sym))
        })?;
        log::debug!("Push down `{}' as `{}'", original, rewritten);
        Ok(PlanNodeEnum::Filter(FilterNode::new(Some(input), rewritten)).make(pool))
    }
}

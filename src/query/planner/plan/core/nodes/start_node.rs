//! 起始节点
//!
//! 执行计划链的零输入叶子节点

use super::plan_node_traits::PlanNode;
use super::NodeRef;
use crate::query::planner::plan::core::explain::PlanNodeDescription;
use crate::query::planner::plan::core::id_generator::next_node_id;

#[derive(Debug, Clone, PartialEq)]
pub struct StartNode {
    id: i64,
    output_var: String,
    col_names: Vec<String>,
}

impl StartNode {
    pub fn new() -> Self {
        Self {
            id: next_node_id(),
            output_var: String::new(),
            col_names: Vec::new(),
        }
    }
}

impl Default for StartNode {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanNode for StartNode {
    fn id(&self) -> i64 {
        self.id
    }

    fn input(&self) -> Option<NodeRef> {
        None
    }

    fn output_var(&self) -> &str {
        &self.output_var
    }

    fn set_output_var(&mut self, var: String) {
        self.output_var = var;
    }

    fn col_names(&self) -> &[String] {
        &self.col_names
    }

    fn set_col_names(&mut self, names: Vec<String>) {
        self.col_names = names;
    }

    fn explain_into(&self, _desc: &mut PlanNodeDescription) {}
}

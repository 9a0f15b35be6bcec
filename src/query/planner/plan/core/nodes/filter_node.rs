//! 过滤节点
//!
//! 持有下推改写后的谓词

use super::plan_node_traits::SingleInputNode;
use super::NodeRef;
use crate::core::Expression;
use crate::impl_single_input_plan_node;

#[derive(Debug, Clone, PartialEq)]
pub struct FilterNode {
    base: SingleInputNode,
    condition: Expression,
}

impl FilterNode {
    pub fn new(input: Option<NodeRef>, condition: Expression) -> Self {
        Self {
            base: SingleInputNode::new(input),
            condition,
        }
    }

    pub fn condition(&self) -> &Expression {
        &self.condition
    }
}

impl_single_input_plan_node!(FilterNode, |node, desc| {
    desc.add_description("condition", node.condition.to_string());
});

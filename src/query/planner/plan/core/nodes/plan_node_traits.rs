//! PlanNode 统一特征定义
//!
//! 所有计划节点共享的接口：标识、输入、输出变量与列名，以及 explain

use super::super::explain::PlanNodeDescription;
use super::NodeRef;
use crate::query::planner::plan::core::id_generator::next_node_id;

/// PlanNode 基础特征
pub trait PlanNode {
    /// 节点的唯一ID
    fn id(&self) -> i64;

    /// 上游输入节点；零输入节点返回 `None`
    fn input(&self) -> Option<NodeRef>;

    fn output_var(&self) -> &str;

    fn set_output_var(&mut self, var: String);

    fn col_names(&self) -> &[String];

    fn set_col_names(&mut self, names: Vec<String>);

    /// 把节点自身的字段写入描述，不修改节点
    fn explain_into(&self, desc: &mut PlanNodeDescription);
}

/// 单输入节点的公共部分
///
/// 节点构造后只有输出变量与列名可以修改
#[derive(Debug, Clone, PartialEq)]
pub struct SingleInputNode {
    id: i64,
    input: Option<NodeRef>,
    output_var: String,
    col_names: Vec<String>,
}

impl SingleInputNode {
    pub fn new(input: Option<NodeRef>) -> Self {
        Self {
            id: next_node_id(),
            input,
            output_var: String::new(),
            col_names: Vec::new(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn input(&self) -> Option<NodeRef> {
        self.input
    }

    pub fn output_var(&self) -> &str {
        &self.output_var
    }

    pub fn set_output_var(&mut self, var: String) {
        self.output_var = var;
    }

    pub fn col_names(&self) -> &[String] {
        &self.col_names
    }

    pub fn set_col_names(&mut self, names: Vec<String>) {
        self.col_names = names;
    }
}

/// 为内嵌 `base: SingleInputNode` 的节点实现 `PlanNode`
#[macro_export]
macro_rules! impl_single_input_plan_node {
    ($node:ty, |$self_:ident, $desc:ident| $explain:block) => {
        impl $crate::query::planner::plan::core::nodes::PlanNode for $node {
            fn id(&self) -> i64 {
                self.base.id()
            }

            fn input(&self) -> Option<$crate::query::planner::plan::core::nodes::NodeRef> {
                self.base.input()
            }

            fn output_var(&self) -> &str {
                self.base.output_var()
            }

            fn set_output_var(&mut self, var: String) {
                self.base.set_output_var(var)
            }

            fn col_names(&self) -> &[String] {
                self.base.col_names()
            }

            fn set_col_names(&mut self, names: Vec<String>) {
                self.base.set_col_names(names)
            }

            fn explain_into(
                &self,
                $desc: &mut $crate::query::planner::plan::core::explain::PlanNodeDescription,
            ) {
                let $self_ = self;
                $explain
            }
        }
    };
}

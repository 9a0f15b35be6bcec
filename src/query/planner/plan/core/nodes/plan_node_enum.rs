//! 计划节点枚举
//!
//! 封闭的节点种类集合。相同形状的节点共享同一个结构体，
//! 由枚举变体区分具体种类，分派通过穷尽匹配完成。

use std::fmt;

use super::index_nodes::{CreateIndexNode, DescIndexNode, DropIndexNode, ShowIndexesNode};
use super::plan_node_traits::PlanNode;
use super::schema_nodes::{
    AlterSchemaNode, CreateSchemaNode, DescSchemaNode, DropSchemaNode, ShowSchemasNode,
};
use super::{FilterNode, NodeRef, PlanNodePool, StartNode};
use crate::query::planner::plan::core::explain::PlanNodeDescription;
use crate::utils::AnonVarGenerator;

/// 计划节点种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanNodeKind {
    Start,
    Filter,
    CreateTag,
    CreateEdge,
    AlterTag,
    AlterEdge,
    DescTag,
    DescEdge,
    ShowCreateTag,
    ShowCreateEdge,
    DropTag,
    DropEdge,
    ShowTags,
    ShowEdges,
    CreateTagIndex,
    CreateEdgeIndex,
    DescTagIndex,
    DescEdgeIndex,
    ShowCreateTagIndex,
    ShowCreateEdgeIndex,
    DropTagIndex,
    DropEdgeIndex,
    ShowTagIndexes,
    ShowEdgeIndexes,
}

impl PlanNodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            PlanNodeKind::Start => "Start",
            PlanNodeKind::Filter => "Filter",
            PlanNodeKind::CreateTag => "CreateTag",
            PlanNodeKind::CreateEdge => "CreateEdge",
            PlanNodeKind::AlterTag => "AlterTag",
            PlanNodeKind::AlterEdge => "AlterEdge",
            PlanNodeKind::DescTag => "DescTag",
            PlanNodeKind::DescEdge => "DescEdge",
            PlanNodeKind::ShowCreateTag => "ShowCreateTag",
            PlanNodeKind::ShowCreateEdge => "ShowCreateEdge",
            PlanNodeKind::DropTag => "DropTag",
            PlanNodeKind::DropEdge => "DropEdge",
            PlanNodeKind::ShowTags => "ShowTags",
            PlanNodeKind::ShowEdges => "ShowEdges",
            PlanNodeKind::CreateTagIndex => "CreateTagIndex",
            PlanNodeKind::CreateEdgeIndex => "CreateEdgeIndex",
            PlanNodeKind::DescTagIndex => "DescTagIndex",
            PlanNodeKind::DescEdgeIndex => "DescEdgeIndex",
            PlanNodeKind::ShowCreateTagIndex => "ShowCreateTagIndex",
            PlanNodeKind::ShowCreateEdgeIndex => "ShowCreateEdgeIndex",
            PlanNodeKind::DropTagIndex => "DropTagIndex",
            PlanNodeKind::DropEdgeIndex => "DropEdgeIndex",
            PlanNodeKind::ShowTagIndexes => "ShowTagIndexes",
            PlanNodeKind::ShowEdgeIndexes => "ShowEdgeIndexes",
        }
    }
}

impl fmt::Display for PlanNodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 计划节点
#[derive(Debug, Clone, PartialEq)]
pub enum PlanNodeEnum {
    Start(StartNode),
    Filter(FilterNode),
    CreateTag(CreateSchemaNode),
    CreateEdge(CreateSchemaNode),
    AlterTag(AlterSchemaNode),
    AlterEdge(AlterSchemaNode),
    DescTag(DescSchemaNode),
    DescEdge(DescSchemaNode),
    ShowCreateTag(DescSchemaNode),
    ShowCreateEdge(DescSchemaNode),
    DropTag(DropSchemaNode),
    DropEdge(DropSchemaNode),
    ShowTags(ShowSchemasNode),
    ShowEdges(ShowSchemasNode),
    CreateTagIndex(CreateIndexNode),
    CreateEdgeIndex(CreateIndexNode),
    DescTagIndex(DescIndexNode),
    DescEdgeIndex(DescIndexNode),
    ShowCreateTagIndex(DescIndexNode),
    ShowCreateEdgeIndex(DescIndexNode),
    DropTagIndex(DropIndexNode),
    DropEdgeIndex(DropIndexNode),
    ShowTagIndexes(ShowIndexesNode),
    ShowEdgeIndexes(ShowIndexesNode),
}

/// 对每个变体内的节点执行同一段代码
macro_rules! for_each_node {
    ($value:expr, $node:ident => $body:expr) => {
        match $value {
            PlanNodeEnum::Start($node) => $body,
            PlanNodeEnum::Filter($node) => $body,
            PlanNodeEnum::CreateTag($node) | PlanNodeEnum::CreateEdge($node) => $body,
            PlanNodeEnum::AlterTag($node) | PlanNodeEnum::AlterEdge($node) => $body,
            PlanNodeEnum::DescTag($node)
            | PlanNodeEnum::DescEdge($node)
            | PlanNodeEnum::ShowCreateTag($node)
            | PlanNodeEnum::ShowCreateEdge($node) => $body,
            PlanNodeEnum::DropTag($node) | PlanNodeEnum::DropEdge($node) => $body,
            PlanNodeEnum::ShowTags($node) | PlanNodeEnum::ShowEdges($node) => $body,
            PlanNodeEnum::CreateTagIndex($node) | PlanNodeEnum::CreateEdgeIndex($node) => $body,
            PlanNodeEnum::DescTagIndex($node)
            | PlanNodeEnum::DescEdgeIndex($node)
            | PlanNodeEnum::ShowCreateTagIndex($node)
            | PlanNodeEnum::ShowCreateEdgeIndex($node) => $body,
            PlanNodeEnum::DropTagIndex($node) | PlanNodeEnum::DropEdgeIndex($node) => $body,
            PlanNodeEnum::ShowTagIndexes($node) | PlanNodeEnum::ShowEdgeIndexes($node) => $body,
        }
    };
}

impl PlanNodeEnum {
    pub fn kind(&self) -> PlanNodeKind {
        match self {
            PlanNodeEnum::Start(_) => PlanNodeKind::Start,
            PlanNodeEnum::Filter(_) => PlanNodeKind::Filter,
            PlanNodeEnum::CreateTag(_) => PlanNodeKind::CreateTag,
            PlanNodeEnum::CreateEdge(_) => PlanNodeKind::CreateEdge,
            PlanNodeEnum::AlterTag(_) => PlanNodeKind::AlterTag,
            PlanNodeEnum::AlterEdge(_) => PlanNodeKind::AlterEdge,
            PlanNodeEnum::DescTag(_) => PlanNodeKind::DescTag,
            PlanNodeEnum::DescEdge(_) => PlanNodeKind::DescEdge,
            PlanNodeEnum::ShowCreateTag(_) => PlanNodeKind::ShowCreateTag,
            PlanNodeEnum::ShowCreateEdge(_) => PlanNodeKind::ShowCreateEdge,
            PlanNodeEnum::DropTag(_) => PlanNodeKind::DropTag,
            PlanNodeEnum::DropEdge(_) => PlanNodeKind::DropEdge,
            PlanNodeEnum::ShowTags(_) => PlanNodeKind::ShowTags,
            PlanNodeEnum::ShowEdges(_) => PlanNodeKind::ShowEdges,
            PlanNodeEnum::CreateTagIndex(_) => PlanNodeKind::CreateTagIndex,
            PlanNodeEnum::CreateEdgeIndex(_) => PlanNodeKind::CreateEdgeIndex,
            PlanNodeEnum::DescTagIndex(_) => PlanNodeKind::DescTagIndex,
            PlanNodeEnum::DescEdgeIndex(_) => PlanNodeKind::DescEdgeIndex,
            PlanNodeEnum::ShowCreateTagIndex(_) => PlanNodeKind::ShowCreateTagIndex,
            PlanNodeEnum::ShowCreateEdgeIndex(_) => PlanNodeKind::ShowCreateEdgeIndex,
            PlanNodeEnum::DropTagIndex(_) => PlanNodeKind::DropTagIndex,
            PlanNodeEnum::DropEdgeIndex(_) => PlanNodeKind::DropEdgeIndex,
            PlanNodeEnum::ShowTagIndexes(_) => PlanNodeKind::ShowTagIndexes,
            PlanNodeEnum::ShowEdgeIndexes(_) => PlanNodeKind::ShowEdgeIndexes,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn id(&self) -> i64 {
        for_each_node!(self, n => n.id())
    }

    pub fn input(&self) -> Option<NodeRef> {
        for_each_node!(self, n => n.input())
    }

    pub fn output_var(&self) -> &str {
        for_each_node!(self, n => n.output_var())
    }

    pub fn set_output_var(&mut self, var: impl Into<String>) {
        let var = var.into();
        for_each_node!(self, n => n.set_output_var(var))
    }

    pub fn col_names(&self) -> &[String] {
        for_each_node!(self, n => n.col_names())
    }

    pub fn set_col_names(&mut self, names: Vec<String>) {
        for_each_node!(self, n => n.set_col_names(names))
    }

    /// 生成节点描述，不包含依赖
    pub fn explain(&self) -> PlanNodeDescription {
        let mut desc =
            PlanNodeDescription::new(self.name(), self.id()).with_output_var(self.output_var());
        for_each_node!(self, n => n.explain_into(&mut desc));
        desc
    }

    /// 注册到对象池并返回句柄
    ///
    /// 未设置输出变量的节点获得 `__<Kind>_<id>` 形式的匿名变量
    pub fn make(mut self, pool: &mut PlanNodePool) -> NodeRef {
        if self.output_var().is_empty() {
            let var = AnonVarGenerator::node_var(self.name(), self.id());
            self.set_output_var(var);
        }
        pool.add(self)
    }
}

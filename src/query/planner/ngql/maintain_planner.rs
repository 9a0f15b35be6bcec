//! 维护操作规划器
//!
//! 把 schema 与索引的 DDL 语句转换成 `Start -> <DDL 节点>` 的执行计划

use crate::query::planner::plan::{
    AlterSchemaNode, CreateIndexNode, CreateSchemaNode, DescIndexNode, DescSchemaNode,
    DropIndexNode, DropSchemaNode, ExecutionPlan, NodeRef, PlanNodeEnum, PlanNodePool,
    ShowIndexesNode, ShowSchemasNode, StartNode,
};
use crate::storage::metadata::{AlterSchemaItem, GraphSpaceId, Schema, SchemaProp};

/// 经过校验的 DDL 语句
#[derive(Debug, Clone, PartialEq)]
pub enum MaintainSentence {
    CreateTag {
        name: String,
        schema: Schema,
        if_not_exists: bool,
    },
    CreateEdge {
        name: String,
        schema: Schema,
        if_not_exists: bool,
    },
    AlterTag {
        name: String,
        items: Vec<AlterSchemaItem>,
        schema_prop: SchemaProp,
    },
    AlterEdge {
        name: String,
        items: Vec<AlterSchemaItem>,
        schema_prop: SchemaProp,
    },
    DescTag(String),
    DescEdge(String),
    ShowCreateTag(String),
    ShowCreateEdge(String),
    DropTag {
        name: String,
        if_exists: bool,
    },
    DropEdge {
        name: String,
        if_exists: bool,
    },
    ShowTags,
    ShowEdges,
    CreateTagIndex {
        index_name: String,
        tag_name: String,
        fields: Vec<String>,
        if_not_exists: bool,
    },
    CreateEdgeIndex {
        index_name: String,
        edge_name: String,
        fields: Vec<String>,
        if_not_exists: bool,
    },
    DescTagIndex(String),
    DescEdgeIndex(String),
    ShowCreateTagIndex(String),
    ShowCreateEdgeIndex(String),
    DropTagIndex {
        index_name: String,
        if_exists: bool,
    },
    DropEdgeIndex {
        index_name: String,
        if_exists: bool,
    },
    ShowTagIndexes,
    ShowEdgeIndexes,
}

/// 维护操作规划器
#[derive(Debug, Default)]
pub struct MaintainPlanner;

impl MaintainPlanner {
    pub fn new() -> Self {
        Self
    }

    /// 生成执行计划，节点注册到 `pool`
    ///
    /// `space_id` 只用于 ALTER，其余语句在执行时读取会话的当前空间
    pub fn transform(
        &self,
        sentence: MaintainSentence,
        space_id: GraphSpaceId,
        pool: &mut PlanNodePool,
    ) -> ExecutionPlan {
        let start = PlanNodeEnum::Start(StartNode::new()).make(pool);
        let input = Some(start);
        let (mut node, col_names) = Self::ddl_node(sentence, space_id, input);
        node.set_col_names(col_names.iter().map(|c| c.to_string()).collect());
        let root: NodeRef = node.make(pool);
        log::debug!("Maintain plan built, root {}", root);
        ExecutionPlan::new(Some(root))
    }

    fn ddl_node(
        sentence: MaintainSentence,
        space_id: GraphSpaceId,
        input: Option<NodeRef>,
    ) -> (PlanNodeEnum, Vec<&'static str>) {
        match sentence {
            MaintainSentence::CreateTag {
                name,
                schema,
                if_not_exists,
            } => (
                PlanNodeEnum::CreateTag(CreateSchemaNode::new(input, name, schema, if_not_exists)),
                vec![],
            ),
            MaintainSentence::CreateEdge {
                name,
                schema,
                if_not_exists,
            } => (
                PlanNodeEnum::CreateEdge(CreateSchemaNode::new(input, name, schema, if_not_exists)),
                vec![],
            ),
            MaintainSentence::AlterTag {
                name,
                items,
                schema_prop,
            } => (
                PlanNodeEnum::AlterTag(AlterSchemaNode::new(
                    input,
                    space_id,
                    name,
                    items,
                    schema_prop,
                )),
                vec![],
            ),
            MaintainSentence::AlterEdge {
                name,
                items,
                schema_prop,
            } => (
                PlanNodeEnum::AlterEdge(AlterSchemaNode::new(
                    input,
                    space_id,
                    name,
                    items,
                    schema_prop,
                )),
                vec![],
            ),
            MaintainSentence::DescTag(name) => (
                PlanNodeEnum::DescTag(DescSchemaNode::new(input, name)),
                vec!["Field", "Type", "Null", "Default"],
            ),
            MaintainSentence::DescEdge(name) => (
                PlanNodeEnum::DescEdge(DescSchemaNode::new(input, name)),
                vec!["Field", "Type", "Null", "Default"],
            ),
            MaintainSentence::ShowCreateTag(name) => (
                PlanNodeEnum::ShowCreateTag(DescSchemaNode::new(input, name)),
                vec!["Tag", "Create Tag"],
            ),
            MaintainSentence::ShowCreateEdge(name) => (
                PlanNodeEnum::ShowCreateEdge(DescSchemaNode::new(input, name)),
                vec!["Edge", "Create Edge"],
            ),
            MaintainSentence::DropTag { name, if_exists } => (
                PlanNodeEnum::DropTag(DropSchemaNode::new(input, name, if_exists)),
                vec![],
            ),
            MaintainSentence::DropEdge { name, if_exists } => (
                PlanNodeEnum::DropEdge(DropSchemaNode::new(input, name, if_exists)),
                vec![],
            ),
            MaintainSentence::ShowTags => (
                PlanNodeEnum::ShowTags(ShowSchemasNode::new(input)),
                vec!["Name"],
            ),
            MaintainSentence::ShowEdges => (
                PlanNodeEnum::ShowEdges(ShowSchemasNode::new(input)),
                vec!["Name"],
            ),
            MaintainSentence::CreateTagIndex {
                index_name,
                tag_name,
                fields,
                if_not_exists,
            } => (
                PlanNodeEnum::CreateTagIndex(CreateIndexNode::new(
                    input,
                    tag_name,
                    index_name,
                    fields,
                    if_not_exists,
                )),
                vec![],
            ),
            MaintainSentence::CreateEdgeIndex {
                index_name,
                edge_name,
                fields,
                if_not_exists,
            } => (
                PlanNodeEnum::CreateEdgeIndex(CreateIndexNode::new(
                    input,
                    edge_name,
                    index_name,
                    fields,
                    if_not_exists,
                )),
                vec![],
            ),
            MaintainSentence::DescTagIndex(name) => (
                PlanNodeEnum::DescTagIndex(DescIndexNode::new(input, name)),
                vec!["Field", "Type"],
            ),
            MaintainSentence::DescEdgeIndex(name) => (
                PlanNodeEnum::DescEdgeIndex(DescIndexNode::new(input, name)),
                vec!["Field", "Type"],
            ),
            MaintainSentence::ShowCreateTagIndex(name) => (
                PlanNodeEnum::ShowCreateTagIndex(DescIndexNode::new(input, name)),
                vec!["Tag Index Name", "Create Tag Index"],
            ),
            MaintainSentence::ShowCreateEdgeIndex(name) => (
                PlanNodeEnum::ShowCreateEdgeIndex(DescIndexNode::new(input, name)),
                vec!["Edge Index Name", "Create Edge Index"],
            ),
            MaintainSentence::DropTagIndex {
                index_name,
                if_exists,
            } => (
                PlanNodeEnum::DropTagIndex(DropIndexNode::new(input, index_name, if_exists)),
                vec![],
            ),
            MaintainSentence::DropEdgeIndex {
                index_name,
                if_exists,
            } => (
                PlanNodeEnum::DropEdgeIndex(DropIndexNode::new(input, index_name, if_exists)),
                vec![],
            ),
            MaintainSentence::ShowTagIndexes => (
                PlanNodeEnum::ShowTagIndexes(ShowIndexesNode::new(input)),
                vec!["Names"],
            ),
            MaintainSentence::ShowEdgeIndexes => (
                PlanNodeEnum::ShowEdgeIndexes(ShowIndexesNode::new(input)),
                vec!["Names"],
            ),
        }
    }
}

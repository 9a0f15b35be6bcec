//! Tag / Edge 索引管理节点
//!
//! | 结构 | 节点种类 |
//! |------|----------|
//! | `CreateIndexNode` | `CreateTagIndex` / `CreateEdgeIndex` |
//! | `DescIndexNode` | `DescTagIndex` / `DescEdgeIndex` / `ShowCreateTagIndex` / `ShowCreateEdgeIndex` |
//! | `DropIndexNode` | `DropTagIndex` / `DropEdgeIndex` |
//! | `ShowIndexesNode` | `ShowTagIndexes` / `ShowEdgeIndexes` |

use super::plan_node_traits::SingleInputNode;
use super::NodeRef;
use crate::impl_single_input_plan_node;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateIndexNode {
    base: SingleInputNode,
    schema_name: String,
    index_name: String,
    fields: Vec<String>,
    if_not_exists: bool,
}

impl CreateIndexNode {
    pub fn new(
        input: Option<NodeRef>,
        schema_name: impl Into<String>,
        index_name: impl Into<String>,
        fields: Vec<String>,
        if_not_exists: bool,
    ) -> Self {
        Self {
            base: SingleInputNode::new(input),
            schema_name: schema_name.into(),
            index_name: index_name.into(),
            fields,
            if_not_exists,
        }
    }

    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn if_not_exists(&self) -> bool {
        self.if_not_exists
    }
}

impl_single_input_plan_node!(CreateIndexNode, |node, desc| {
    desc.add_description("schemaName", node.schema_name.as_str());
    desc.add_description("indexName", node.index_name.as_str());
    desc.add_description(
        "fields",
        serde_json::to_string(&node.fields).unwrap_or_default(),
    );
    desc.add_description("ifNotExists", node.if_not_exists.to_string());
});

#[derive(Debug, Clone, PartialEq)]
pub struct DescIndexNode {
    base: SingleInputNode,
    index_name: String,
}

impl DescIndexNode {
    pub fn new(input: Option<NodeRef>, index_name: impl Into<String>) -> Self {
        Self {
            base: SingleInputNode::new(input),
            index_name: index_name.into(),
        }
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }
}

impl_single_input_plan_node!(DescIndexNode, |node, desc| {
    desc.add_description("indexName", node.index_name.as_str());
});

#[derive(Debug, Clone, PartialEq)]
pub struct DropIndexNode {
    base: SingleInputNode,
    index_name: String,
    if_exists: bool,
}

impl DropIndexNode {
    pub fn new(input: Option<NodeRef>, index_name: impl Into<String>, if_exists: bool) -> Self {
        Self {
            base: SingleInputNode::new(input),
            index_name: index_name.into(),
            if_exists,
        }
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn if_exists(&self) -> bool {
        self.if_exists
    }
}

impl_single_input_plan_node!(DropIndexNode, |node, desc| {
    desc.add_description("indexName", node.index_name.as_str());
    desc.add_description("ifExists", node.if_exists.to_string());
});

/// SHOW TAG INDEXES / SHOW EDGE INDEXES
#[derive(Debug, Clone, PartialEq)]
pub struct ShowIndexesNode {
    base: SingleInputNode,
}

impl ShowIndexesNode {
    pub fn new(input: Option<NodeRef>) -> Self {
        Self {
            base: SingleInputNode::new(input),
        }
    }
}

impl_single_input_plan_node!(ShowIndexesNode, |_node, _desc| {});

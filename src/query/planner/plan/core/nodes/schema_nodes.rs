//! Tag / Edge schema 管理节点
//!
//! | 结构 | 节点种类 |
//! |------|----------|
//! | `CreateSchemaNode` | `CreateTag` / `CreateEdge` |
//! | `AlterSchemaNode` | `AlterTag` / `AlterEdge` |
//! | `DescSchemaNode` | `DescTag` / `DescEdge` / `ShowCreateTag` / `ShowCreateEdge` |
//! | `DropSchemaNode` | `DropTag` / `DropEdge` |
//! | `ShowSchemasNode` | `ShowTags` / `ShowEdges` |

use super::plan_node_traits::SingleInputNode;
use super::NodeRef;
use crate::impl_single_input_plan_node;
use crate::storage::metadata::{AlterSchemaItem, GraphSpaceId, Schema, SchemaProp};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateSchemaNode {
    base: SingleInputNode,
    name: String,
    schema: Schema,
    if_not_exists: bool,
}

impl CreateSchemaNode {
    pub fn new(
        input: Option<NodeRef>,
        name: impl Into<String>,
        schema: Schema,
        if_not_exists: bool,
    ) -> Self {
        Self {
            base: SingleInputNode::new(input),
            name: name.into(),
            schema,
            if_not_exists,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn if_not_exists(&self) -> bool {
        self.if_not_exists
    }
}

impl_single_input_plan_node!(CreateSchemaNode, |node, desc| {
    desc.add_description("name", node.name.as_str());
    desc.add_description("ifNotExists", node.if_not_exists.to_string());
    desc.add_description(
        "schema",
        serde_json::to_string(&node.schema).unwrap_or_default(),
    );
});

#[derive(Debug, Clone, PartialEq)]
pub struct AlterSchemaNode {
    base: SingleInputNode,
    space: GraphSpaceId,
    name: String,
    items: Vec<AlterSchemaItem>,
    schema_prop: SchemaProp,
}

impl AlterSchemaNode {
    pub fn new(
        input: Option<NodeRef>,
        space: GraphSpaceId,
        name: impl Into<String>,
        items: Vec<AlterSchemaItem>,
        schema_prop: SchemaProp,
    ) -> Self {
        Self {
            base: SingleInputNode::new(input),
            space,
            name: name.into(),
            items,
            schema_prop,
        }
    }

    pub fn space(&self) -> GraphSpaceId {
        self.space
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[AlterSchemaItem] {
        &self.items
    }

    pub fn schema_prop(&self) -> &SchemaProp {
        &self.schema_prop
    }
}

impl_single_input_plan_node!(AlterSchemaNode, |node, desc| {
    desc.add_description("space", node.space.to_string());
    desc.add_description("name", node.name.as_str());
    desc.add_description(
        "schemaItems",
        serde_json::to_string(&node.items).unwrap_or_default(),
    );
    desc.add_description(
        "schemaProp",
        serde_json::to_string(&node.schema_prop).unwrap_or_default(),
    );
});

#[derive(Debug, Clone, PartialEq)]
pub struct DescSchemaNode {
    base: SingleInputNode,
    name: String,
}

impl DescSchemaNode {
    pub fn new(input: Option<NodeRef>, name: impl Into<String>) -> Self {
        Self {
            base: SingleInputNode::new(input),
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl_single_input_plan_node!(DescSchemaNode, |node, desc| {
    desc.add_description("name", node.name.as_str());
});

#[derive(Debug, Clone, PartialEq)]
pub struct DropSchemaNode {
    base: SingleInputNode,
    name: String,
    if_exists: bool,
}

impl DropSchemaNode {
    pub fn new(input: Option<NodeRef>, name: impl Into<String>, if_exists: bool) -> Self {
        Self {
            base: SingleInputNode::new(input),
            name: name.into(),
            if_exists,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn if_exists(&self) -> bool {
        self.if_exists
    }
}

impl_single_input_plan_node!(DropSchemaNode, |node, desc| {
    desc.add_description("name", node.name.as_str());
    desc.add_description("ifExists", node.if_exists.to_string());
});

/// SHOW TAGS / SHOW EDGES
#[derive(Debug, Clone, PartialEq)]
pub struct ShowSchemasNode {
    base: SingleInputNode,
}

impl ShowSchemasNode {
    pub fn new(input: Option<NodeRef>) -> Self {
        Self {
            base: SingleInputNode::new(input),
        }
    }
}

impl_single_input_plan_node!(ShowSchemasNode, |_node, _desc| {});

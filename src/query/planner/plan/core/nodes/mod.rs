//! 计划节点
//!
//! 所有节点由查询级的对象池持有，节点之间只保存 `NodeRef` 句柄

pub mod filter_node;
pub mod index_nodes;
pub mod plan_node_enum;
pub mod plan_node_traits;
pub mod schema_nodes;
pub mod start_node;


use crate::utils::{ObjRef, ObjectPool};

/// 计划节点句柄
pub type NodeRef = ObjRef;

/// 计划节点对象池
pub type PlanNodePool = ObjectPool<PlanNodeEnum>;

pub use filter_node::FilterNode;
pub use index_nodes::{CreateIndexNode, DescIndexNode, DropIndexNode, ShowIndexesNode};
pub use plan_node_enum::{PlanNodeEnum, PlanNodeKind};
pub use plan_node_traits::{PlanNode, SingleInputNode};
pub use schema_nodes::{
    AlterSchemaNode, CreateSchemaNode, DescSchemaNode, DropSchemaNode, ShowSchemasNode,
};
pub use start_node::StartNode;

//! 元数据服务客户端接口
//!
//! 执行器通过该接口发起 schema 与索引的增删查，每次调用对应一次远程请求

use async_trait::async_trait;

use super::types::{
    AlterSchemaItem, EdgeItem, EdgeType, GraphSpaceId, IndexId, IndexItem, Schema, SchemaProp,
    TagId, TagItem,
};
use crate::core::error::MetaResult;

#[async_trait]
pub trait MetaClient: Send + Sync {
    async fn create_tag_schema(
        &self,
        space_id: GraphSpaceId,
        name: &str,
        schema: &Schema,
        if_not_exists: bool,
    ) -> MetaResult<TagId>;

    async fn alter_tag_schema(
        &self,
        space_id: GraphSpaceId,
        name: &str,
        items: &[AlterSchemaItem],
        schema_prop: &SchemaProp,
    ) -> MetaResult<()>;

    async fn get_tag_schema(&self, space_id: GraphSpaceId, name: &str) -> MetaResult<Schema>;

    async fn drop_tag_schema(
        &self,
        space_id: GraphSpaceId,
        name: &str,
        if_exists: bool,
    ) -> MetaResult<()>;

    async fn list_tag_schemas(&self, space_id: GraphSpaceId) -> MetaResult<Vec<TagItem>>;

    async fn create_edge_schema(
        &self,
        space_id: GraphSpaceId,
        name: &str,
        schema: &Schema,
        if_not_exists: bool,
    ) -> MetaResult<EdgeType>;

    async fn alter_edge_schema(
        &self,
        space_id: GraphSpaceId,
        name: &str,
        items: &[AlterSchemaItem],
        schema_prop: &SchemaProp,
    ) -> MetaResult<()>;

    async fn get_edge_schema(&self, space_id: GraphSpaceId, name: &str) -> MetaResult<Schema>;

    async fn drop_edge_schema(
        &self,
        space_id: GraphSpaceId,
        name: &str,
        if_exists: bool,
    ) -> MetaResult<()>;

    async fn list_edge_schemas(&self, space_id: GraphSpaceId) -> MetaResult<Vec<EdgeItem>>;

    async fn create_tag_index(
        &self,
        space_id: GraphSpaceId,
        index_name: &str,
        tag_name: &str,
        fields: &[String],
        if_not_exists: bool,
    ) -> MetaResult<IndexId>;

    async fn drop_tag_index(
        &self,
        space_id: GraphSpaceId,
        index_name: &str,
        if_exists: bool,
    ) -> MetaResult<()>;

    async fn get_tag_index(&self, space_id: GraphSpaceId, index_name: &str)
        -> MetaResult<IndexItem>;

    async fn list_tag_indexes(&self, space_id: GraphSpaceId) -> MetaResult<Vec<IndexItem>>;

    async fn create_edge_index(
        &self,
        space_id: GraphSpaceId,
        index_name: &str,
        edge_name: &str,
        fields: &[String],
        if_not_exists: bool,
    ) -> MetaResult<IndexId>;

    async fn drop_edge_index(
        &self,
        space_id: GraphSpaceId,
        index_name: &str,
        if_exists: bool,
    ) -> MetaResult<()>;

    async fn get_edge_index(
        &self,
        space_id: GraphSpaceId,
        index_name: &str,
    ) -> MetaResult<IndexItem>;

    async fn list_edge_indexes(&self, space_id: GraphSpaceId) -> MetaResult<Vec<IndexItem>>;
}

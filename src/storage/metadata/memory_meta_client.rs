//! 内存元数据客户端
//!
//! 在进程内保存 schema 与索引，供测试以及嵌入式场景使用。
//! 所有 id 在同一客户端内单调递增。

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::meta_client::MetaClient;
use super::types::{
    AlterSchemaItem, AlterSchemaOp, ColumnDef, EdgeItem, EdgeType, GraphSpaceId, IndexId,
    IndexItem, Schema, SchemaProp, TagId, TagItem,
};
use crate::core::error::{MetaError, MetaResult};

#[derive(Debug, Default)]
struct SpaceMeta {
    tags: Vec<TagItem>,
    edges: Vec<EdgeItem>,
    tag_indexes: Vec<IndexItem>,
    edge_indexes: Vec<IndexItem>,
}

#[derive(Debug)]
struct Inner {
    spaces: HashMap<GraphSpaceId, SpaceMeta>,
    next_id: i32,
    injected_failure: Option<String>,
}

impl Inner {
    fn alloc_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    /// 取出注入的故障，每次注入只生效一次
    fn check_rpc(&mut self) -> MetaResult<()> {
        match self.injected_failure.take() {
            Some(msg) => Err(MetaError::RpcFailure(msg)),
            None => Ok(()),
        }
    }

    fn space(&mut self, space_id: GraphSpaceId) -> MetaResult<&mut SpaceMeta> {
        self.check_rpc()?;
        self.spaces
            .get_mut(&space_id)
            .ok_or(MetaError::SpaceNotFound(space_id))
    }
}

pub struct MemoryMetaClient {
    inner: Mutex<Inner>,
}

impl MemoryMetaClient {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                spaces: HashMap::new(),
                next_id: 0,
                injected_failure: None,
            }),
        }
    }

    /// 注册一个图空间
    pub fn add_space(&self, space_id: GraphSpaceId) {
        self.inner.lock().spaces.entry(space_id).or_default();
    }

    /// 让下一次远程调用以 `RpcFailure` 失败
    pub fn fail_next_rpc(&self, msg: impl Into<String>) {
        self.inner.lock().injected_failure = Some(msg.into());
    }

    /// 直接写入一条边索引记录，不做任何校验
    ///
    /// 用于模拟元数据服务返回重复名字等异常列表
    pub fn insert_raw_edge_index(&self, space_id: GraphSpaceId, item: IndexItem) {
        self.inner
            .lock()
            .spaces
            .entry(space_id)
            .or_default()
            .edge_indexes
            .push(item);
    }

    /// 同 `insert_raw_edge_index`，写入标签索引
    pub fn insert_raw_tag_index(&self, space_id: GraphSpaceId, item: IndexItem) {
        self.inner
            .lock()
            .spaces
            .entry(space_id)
            .or_default()
            .tag_indexes
            .push(item);
    }
}

impl Default for MemoryMetaClient {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_alter(
    schema: &mut Schema,
    items: &[AlterSchemaItem],
    schema_prop: &SchemaProp,
) -> MetaResult<()> {
    let mut columns = schema.columns.clone();
    for item in items {
        for col in &item.schema.columns {
            let pos = columns.iter().position(|c| c.name == col.name);
            match (item.op, pos) {
                (AlterSchemaOp::Add, None) => columns.push(col.clone()),
                (AlterSchemaOp::Add, Some(_)) => {
                    return Err(MetaError::Existed(format!("column `{}'", col.name)))
                }
                (AlterSchemaOp::Change, Some(i)) => columns[i] = col.clone(),
                (AlterSchemaOp::Drop, Some(i)) => {
                    columns.remove(i);
                }
                (AlterSchemaOp::Change | AlterSchemaOp::Drop, None) => {
                    return Err(MetaError::Conflict(format!(
                        "column `{}' does not exist",
                        col.name
                    )))
                }
            }
        }
    }
    schema.columns = columns;
    if schema_prop.ttl_duration.is_some() {
        schema.schema_prop.ttl_duration = schema_prop.ttl_duration;
    }
    if schema_prop.ttl_col.is_some() {
        schema.schema_prop.ttl_col = schema_prop.ttl_col.clone();
    }
    Ok(())
}

fn resolve_fields(schema: &Schema, fields: &[String]) -> MetaResult<Vec<ColumnDef>> {
    fields
        .iter()
        .map(|f| {
            schema
                .column(f)
                .cloned()
                .ok_or_else(|| MetaError::Conflict(format!("field `{}' not found", f)))
        })
        .collect()
}

fn create_index(
    indexes: &mut Vec<IndexItem>,
    index_id: IndexId,
    index_name: &str,
    schema_name: &str,
    fields: Vec<ColumnDef>,
    if_not_exists: bool,
) -> MetaResult<IndexId> {
    if let Some(existing) = indexes.iter().find(|i| i.index_name == index_name) {
        if if_not_exists {
            return Ok(existing.index_id);
        }
        return Err(MetaError::Existed(index_name.to_string()));
    }
    indexes.push(IndexItem {
        index_id,
        index_name: index_name.to_string(),
        schema_name: schema_name.to_string(),
        fields,
    });
    Ok(index_id)
}

fn drop_index(indexes: &mut Vec<IndexItem>, index_name: &str, if_exists: bool) -> MetaResult<()> {
    let before = indexes.len();
    indexes.retain(|i| i.index_name != index_name);
    if indexes.len() == before && !if_exists {
        return Err(MetaError::IndexNotFound(index_name.to_string()));
    }
    Ok(())
}

#[async_trait]
impl MetaClient for MemoryMetaClient {
    async fn create_tag_schema(
        &self,
        space_id: GraphSpaceId,
        name: &str,
        schema: &Schema,
        if_not_exists: bool,
    ) -> MetaResult<TagId> {
        let mut inner = self.inner.lock();
        if let Some(existing) = inner.space(space_id)?.tags.iter().find(|t| t.tag_name == name) {
            if if_not_exists {
                return Ok(existing.tag_id);
            }
            return Err(MetaError::Existed(name.to_string()));
        }
        let tag_id = inner.alloc_id();
        inner.space(space_id)?.tags.push(TagItem {
            tag_id,
            tag_name: name.to_string(),
            version: 0,
            schema: schema.clone(),
        });
        Ok(tag_id)
    }

    async fn alter_tag_schema(
        &self,
        space_id: GraphSpaceId,
        name: &str,
        items: &[AlterSchemaItem],
        schema_prop: &SchemaProp,
    ) -> MetaResult<()> {
        let mut inner = self.inner.lock();
        let space = inner.space(space_id)?;
        let tag = space
            .tags
            .iter_mut()
            .find(|t| t.tag_name == name)
            .ok_or_else(|| MetaError::TagNotFound(name.to_string()))?;
        apply_alter(&mut tag.schema, items, schema_prop)?;
        tag.version += 1;
        Ok(())
    }

    async fn get_tag_schema(&self, space_id: GraphSpaceId, name: &str) -> MetaResult<Schema> {
        let mut inner = self.inner.lock();
        inner
            .space(space_id)?
            .tags
            .iter()
            .find(|t| t.tag_name == name)
            .map(|t| t.schema.clone())
            .ok_or_else(|| MetaError::TagNotFound(name.to_string()))
    }

    async fn drop_tag_schema(
        &self,
        space_id: GraphSpaceId,
        name: &str,
        if_exists: bool,
    ) -> MetaResult<()> {
        let mut inner = self.inner.lock();
        let space = inner.space(space_id)?;
        if space.tag_indexes.iter().any(|i| i.schema_name == name) {
            return Err(MetaError::Conflict(format!(
                "tag `{}' is referenced by an index",
                name
            )));
        }
        let before = space.tags.len();
        space.tags.retain(|t| t.tag_name != name);
        if space.tags.len() == before && !if_exists {
            return Err(MetaError::TagNotFound(name.to_string()));
        }
        Ok(())
    }

    async fn list_tag_schemas(&self, space_id: GraphSpaceId) -> MetaResult<Vec<TagItem>> {
        let mut inner = self.inner.lock();
        Ok(inner.space(space_id)?.tags.clone())
    }

    async fn create_edge_schema(
        &self,
        space_id: GraphSpaceId,
        name: &str,
        schema: &Schema,
        if_not_exists: bool,
    ) -> MetaResult<EdgeType> {
        let mut inner = self.inner.lock();
        if let Some(existing) = inner
            .space(space_id)?
            .edges
            .iter()
            .find(|e| e.edge_name == name)
        {
            if if_not_exists {
                return Ok(existing.edge_type);
            }
            return Err(MetaError::Existed(name.to_string()));
        }
        let edge_type = inner.alloc_id();
        inner.space(space_id)?.edges.push(EdgeItem {
            edge_type,
            edge_name: name.to_string(),
            version: 0,
            schema: schema.clone(),
        });
        Ok(edge_type)
    }

    async fn alter_edge_schema(
        &self,
        space_id: GraphSpaceId,
        name: &str,
        items: &[AlterSchemaItem],
        schema_prop: &SchemaProp,
    ) -> MetaResult<()> {
        let mut inner = self.inner.lock();
        let space = inner.space(space_id)?;
        let edge = space
            .edges
            .iter_mut()
            .find(|e| e.edge_name == name)
            .ok_or_else(|| MetaError::EdgeNotFound(name.to_string()))?;
        apply_alter(&mut edge.schema, items, schema_prop)?;
        edge.version += 1;
        Ok(())
    }

    async fn get_edge_schema(&self, space_id: GraphSpaceId, name: &str) -> MetaResult<Schema> {
        let mut inner = self.inner.lock();
        inner
            .space(space_id)?
            .edges
            .iter()
            .find(|e| e.edge_name == name)
            .map(|e| e.schema.clone())
            .ok_or_else(|| MetaError::EdgeNotFound(name.to_string()))
    }

    async fn drop_edge_schema(
        &self,
        space_id: GraphSpaceId,
        name: &str,
        if_exists: bool,
    ) -> MetaResult<()> {
        let mut inner = self.inner.lock();
        let space = inner.space(space_id)?;
        if space.edge_indexes.iter().any(|i| i.schema_name == name) {
            return Err(MetaError::Conflict(format!(
                "edge `{}' is referenced by an index",
                name
            )));
        }
        let before = space.edges.len();
        space.edges.retain(|e| e.edge_name != name);
        if space.edges.len() == before && !if_exists {
            return Err(MetaError::EdgeNotFound(name.to_string()));
        }
        Ok(())
    }

    async fn list_edge_schemas(&self, space_id: GraphSpaceId) -> MetaResult<Vec<EdgeItem>> {
        let mut inner = self.inner.lock();
        Ok(inner.space(space_id)?.edges.clone())
    }

    async fn create_tag_index(
        &self,
        space_id: GraphSpaceId,
        index_name: &str,
        tag_name: &str,
        fields: &[String],
        if_not_exists: bool,
    ) -> MetaResult<IndexId> {
        let mut inner = self.inner.lock();
        let index_id = inner.next_id + 1;
        let space = inner.space(space_id)?;
        let schema = space
            .tags
            .iter()
            .find(|t| t.tag_name == tag_name)
            .map(|t| &t.schema)
            .ok_or_else(|| MetaError::TagNotFound(tag_name.to_string()))?;
        let columns = resolve_fields(schema, fields)?;
        let id = create_index(
            &mut space.tag_indexes,
            index_id,
            index_name,
            tag_name,
            columns,
            if_not_exists,
        )?;
        if id == index_id {
            inner.next_id = index_id;
        }
        Ok(id)
    }

    async fn drop_tag_index(
        &self,
        space_id: GraphSpaceId,
        index_name: &str,
        if_exists: bool,
    ) -> MetaResult<()> {
        let mut inner = self.inner.lock();
        drop_index(&mut inner.space(space_id)?.tag_indexes, index_name, if_exists)
    }

    async fn get_tag_index(
        &self,
        space_id: GraphSpaceId,
        index_name: &str,
    ) -> MetaResult<IndexItem> {
        let mut inner = self.inner.lock();
        inner
            .space(space_id)?
            .tag_indexes
            .iter()
            .find(|i| i.index_name == index_name)
            .cloned()
            .ok_or_else(|| MetaError::IndexNotFound(index_name.to_string()))
    }

    async fn list_tag_indexes(&self, space_id: GraphSpaceId) -> MetaResult<Vec<IndexItem>> {
        let mut inner = self.inner.lock();
        Ok(inner.space(space_id)?.tag_indexes.clone())
    }

    async fn create_edge_index(
        &self,
        space_id: GraphSpaceId,
        index_name: &str,
        edge_name: &str,
        fields: &[String],
        if_not_exists: bool,
    ) -> MetaResult<IndexId> {
        let mut inner = self.inner.lock();
        let index_id = inner.next_id + 1;
        let space = inner.space(space_id)?;
        let schema = space
            .edges
            .iter()
            .find(|e| e.edge_name == edge_name)
            .map(|e| &e.schema)
            .ok_or_else(|| MetaError::EdgeNotFound(edge_name.to_string()))?;
        let columns = resolve_fields(schema, fields)?;
        let id = create_index(
            &mut space.edge_indexes,
            index_id,
            index_name,
            edge_name,
            columns,
            if_not_exists,
        )?;
        if id == index_id {
            inner.next_id = index_id;
        }
        Ok(id)
    }

    async fn drop_edge_index(
        &self,
        space_id: GraphSpaceId,
        index_name: &str,
        if_exists: bool,
    ) -> MetaResult<()> {
        let mut inner = self.inner.lock();
        drop_index(&mut inner.space(space_id)?.edge_indexes, index_name, if_exists)
    }

    async fn get_edge_index(
        &self,
        space_id: GraphSpaceId,
        index_name: &str,
    ) -> MetaResult<IndexItem> {
        let mut inner = self.inner.lock();
        inner
            .space(space_id)?
            .edge_indexes
            .iter()
            .find(|i| i.index_name == index_name)
            .cloned()
            .ok_or_else(|| MetaError::IndexNotFound(index_name.to_string()))
    }

    async fn list_edge_indexes(&self, space_id: GraphSpaceId) -> MetaResult<Vec<IndexItem>> {
        let mut inner = self.inner.lock();
        Ok(inner.space(space_id)?.edge_indexes.clone())
    }
}

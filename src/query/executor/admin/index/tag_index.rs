//! 标签索引执行器
//!
//! 提供标签索引的创建、删除、描述、SHOW CREATE 和列出功能

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::core::error::{DBError, DBResult};
use crate::core::result::{IteratorKind, ResultBuilder};
use crate::core::{DataSet, Value};
use crate::query::context::QueryContext;
use crate::query::executor::base::{BaseExecutor, Executor};
use crate::query::planner::plan::{
    CreateIndexNode, DescIndexNode, DropIndexNode, PlanNodeEnum, ShowIndexesNode,
};
use crate::utils::{to_desc_index, to_show_create_index};

#[derive(Debug)]
pub struct CreateTagIndexExecutor {
    base: BaseExecutor,
    node: CreateIndexNode,
}

impl CreateTagIndexExecutor {
    pub fn new(node: CreateIndexNode, qctx: Arc<QueryContext>) -> Self {
        let plan_node = PlanNodeEnum::CreateTagIndex(node.clone());
        Self {
            base: BaseExecutor::new("CreateTagIndexExecutor", plan_node, qctx),
            node,
        }
    }
}

#[async_trait]
impl Executor for CreateTagIndexExecutor {
    async fn execute(&mut self) -> DBResult<()> {
        let qctx = self.base.qctx().clone();
        let space_id = qctx.space_id()?;
        qctx.meta_client()
            .create_tag_index(
                space_id,
                self.node.index_name(),
                self.node.schema_name(),
                self.node.fields(),
                self.node.if_not_exists(),
            )
            .await
            .map_err(|e| {
                log::error!(
                    "SpaceId: {}, Create index `{}' at tag: `{}' failed: {}",
                    space_id,
                    self.node.index_name(),
                    self.node.schema_name(),
                    e
                );
                DBError::from(e)
            })?;
        self.base.finish(ResultBuilder::new().finish())
    }

    fn base(&self) -> &BaseExecutor {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseExecutor {
        &mut self.base
    }
}

#[derive(Debug)]
pub struct DropTagIndexExecutor {
    base: BaseExecutor,
    node: DropIndexNode,
}

impl DropTagIndexExecutor {
    pub fn new(node: DropIndexNode, qctx: Arc<QueryContext>) -> Self {
        let plan_node = PlanNodeEnum::DropTagIndex(node.clone());
        Self {
            base: BaseExecutor::new("DropTagIndexExecutor", plan_node, qctx),
            node,
        }
    }
}

#[async_trait]
impl Executor for DropTagIndexExecutor {
    async fn execute(&mut self) -> DBResult<()> {
        let qctx = self.base.qctx().clone();
        let space_id = qctx.space_id()?;
        qctx.meta_client()
            .drop_tag_index(space_id, self.node.index_name(), self.node.if_exists())
            .await
            .map_err(|e| {
                log::error!(
                    "SpaceId: {}, Drop tag index `{}' failed: {}",
                    space_id,
                    self.node.index_name(),
                    e
                );
                DBError::from(e)
            })?;
        self.base.finish(ResultBuilder::new().finish())
    }

    fn base(&self) -> &BaseExecutor {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseExecutor {
        &mut self.base
    }
}

#[derive(Debug)]
pub struct DescTagIndexExecutor {
    base: BaseExecutor,
    node: DescIndexNode,
}

impl DescTagIndexExecutor {
    pub fn new(node: DescIndexNode, qctx: Arc<QueryContext>) -> Self {
        let plan_node = PlanNodeEnum::DescTagIndex(node.clone());
        Self {
            base: BaseExecutor::new("DescTagIndexExecutor", plan_node, qctx),
            node,
        }
    }
}

#[async_trait]
impl Executor for DescTagIndexExecutor {
    async fn execute(&mut self) -> DBResult<()> {
        let qctx = self.base.qctx().clone();
        let space_id = qctx.space_id()?;
        let index = qctx
            .meta_client()
            .get_tag_index(space_id, self.node.index_name())
            .await
            .map_err(|e| {
                log::error!(
                    "SpaceId: {}, Desc tag index `{}' failed: {}",
                    space_id,
                    self.node.index_name(),
                    e
                );
                DBError::from(e)
            })?;
        self.base.finish(
            ResultBuilder::new()
                .value(to_desc_index(&index))
                .iter(IteratorKind::Default)
                .finish(),
        )
    }

    fn base(&self) -> &BaseExecutor {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseExecutor {
        &mut self.base
    }
}

#[derive(Debug)]
pub struct ShowCreateTagIndexExecutor {
    base: BaseExecutor,
    node: DescIndexNode,
}

impl ShowCreateTagIndexExecutor {
    pub fn new(node: DescIndexNode, qctx: Arc<QueryContext>) -> Self {
        let plan_node = PlanNodeEnum::ShowCreateTagIndex(node.clone());
        Self {
            base: BaseExecutor::new("ShowCreateTagIndexExecutor", plan_node, qctx),
            node,
        }
    }
}

#[async_trait]
impl Executor for ShowCreateTagIndexExecutor {
    async fn execute(&mut self) -> DBResult<()> {
        let qctx = self.base.qctx().clone();
        let space_id = qctx.space_id()?;
        let index = qctx
            .meta_client()
            .get_tag_index(space_id, self.node.index_name())
            .await
            .map_err(|e| {
                log::error!(
                    "SpaceId: {}, Show create tag index `{}' failed: {}",
                    space_id,
                    self.node.index_name(),
                    e
                );
                DBError::from(e)
            })?;
        self.base.finish(
            ResultBuilder::new()
                .value(to_show_create_index(true, self.node.index_name(), &index))
                .iter(IteratorKind::Default)
                .finish(),
        )
    }

    fn base(&self) -> &BaseExecutor {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseExecutor {
        &mut self.base
    }
}

/// 元数据服务可能返回重复的索引名，输出前去重并按字典序排列
#[derive(Debug)]
pub struct ShowTagIndexesExecutor {
    base: BaseExecutor,
}

impl ShowTagIndexesExecutor {
    pub fn new(node: ShowIndexesNode, qctx: Arc<QueryContext>) -> Self {
        Self {
            base: BaseExecutor::new(
                "ShowTagIndexesExecutor",
                PlanNodeEnum::ShowTagIndexes(node),
                qctx,
            ),
        }
    }
}

#[async_trait]
impl Executor for ShowTagIndexesExecutor {
    async fn execute(&mut self) -> DBResult<()> {
        let qctx = self.base.qctx().clone();
        let space_id = qctx.space_id()?;
        let indexes = qctx
            .meta_client()
            .list_tag_indexes(space_id)
            .await
            .map_err(|e| {
                log::error!("SpaceId: {}, Show tag indexes failed: {}", space_id, e);
                DBError::from(e)
            })?;

        let names: BTreeSet<String> = indexes.into_iter().map(|i| i.index_name).collect();
        let mut ds = DataSet::with_columns(["Names"]);
        for name in names {
            ds.add_row(vec![Value::String(name)]);
        }
        self.base.finish(
            ResultBuilder::new()
                .value(ds)
                .iter(IteratorKind::Default)
                .finish(),
        )
    }

    fn base(&self) -> &BaseExecutor {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseExecutor {
        &mut self.base
    }
}

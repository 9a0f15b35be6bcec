//! Tag schema 执行器
//!
//! 每个执行器向元数据服务发起一次请求；远程调用失败时记录空间与 tag 名后原样返回

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::core::error::{DBError, DBResult};
use crate::core::result::{IteratorKind, ResultBuilder};
use crate::core::{DataSet, Value};
use crate::query::context::QueryContext;
use crate::query::executor::base::{BaseExecutor, Executor};
use crate::query::planner::plan::{
    AlterSchemaNode, CreateSchemaNode, DescSchemaNode, DropSchemaNode, PlanNodeEnum,
    ShowSchemasNode,
};
use crate::utils::{to_desc_schema, to_show_create_schema};

#[derive(Debug)]
pub struct CreateTagExecutor {
    base: BaseExecutor,
    node: CreateSchemaNode,
}

impl CreateTagExecutor {
    pub fn new(node: CreateSchemaNode, qctx: Arc<QueryContext>) -> Self {
        let plan_node = PlanNodeEnum::CreateTag(node.clone());
        Self {
            base: BaseExecutor::new("CreateTagExecutor", plan_node, qctx),
            node,
        }
    }
}

#[async_trait]
impl Executor for CreateTagExecutor {
    async fn execute(&mut self) -> DBResult<()> {
        let qctx = self.base.qctx().clone();
        let space_id = qctx.space_id()?;
        qctx.meta_client()
            .create_tag_schema(
                space_id,
                self.node.name(),
                self.node.schema(),
                self.node.if_not_exists(),
            )
            .await
            .map_err(|e| {
                log::error!(
                    "SpaceId: {}, Create tag `{}' failed: {}",
                    space_id,
                    self.node.name(),
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
pub struct AlterTagExecutor {
    base: BaseExecutor,
    node: AlterSchemaNode,
}

impl AlterTagExecutor {
    pub fn new(node: AlterSchemaNode, qctx: Arc<QueryContext>) -> Self {
        let plan_node = PlanNodeEnum::AlterTag(node.clone());
        Self {
            base: BaseExecutor::new("AlterTagExecutor", plan_node, qctx),
            node,
        }
    }
}

#[async_trait]
impl Executor for AlterTagExecutor {
    async fn execute(&mut self) -> DBResult<()> {
        let qctx = self.base.qctx().clone();
        let space_id = self.node.space();
        qctx.meta_client()
            .alter_tag_schema(
                space_id,
                self.node.name(),
                self.node.items(),
                self.node.schema_prop(),
            )
            .await
            .map_err(|e| {
                log::error!(
                    "SpaceId: {}, Alter tag `{}' failed: {}",
                    space_id,
                    self.node.name(),
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

/// DESC TAG 与 SHOW CREATE TAG 共用同一个描述节点，仅输出格式不同
#[derive(Debug)]
pub struct DescTagExecutor {
    base: BaseExecutor,
    node: DescSchemaNode,
}

impl DescTagExecutor {
    pub fn new(node: DescSchemaNode, qctx: Arc<QueryContext>) -> Self {
        let plan_node = PlanNodeEnum::DescTag(node.clone());
        Self {
            base: BaseExecutor::new("DescTagExecutor", plan_node, qctx),
            node,
        }
    }
}

#[async_trait]
impl Executor for DescTagExecutor {
    async fn execute(&mut self) -> DBResult<()> {
        let qctx = self.base.qctx().clone();
        let space_id = qctx.space_id()?;
        let schema = qctx
            .meta_client()
            .get_tag_schema(space_id, self.node.name())
            .await
            .map_err(|e| {
                log::error!(
                    "SpaceId: {}, Desc tag `{}' failed: {}",
                    space_id,
                    self.node.name(),
                    e
                );
                DBError::from(e)
            })?;
        self.base.finish(
            ResultBuilder::new()
                .value(to_desc_schema(&schema))
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
pub struct ShowCreateTagExecutor {
    base: BaseExecutor,
    node: DescSchemaNode,
}

impl ShowCreateTagExecutor {
    pub fn new(node: DescSchemaNode, qctx: Arc<QueryContext>) -> Self {
        let plan_node = PlanNodeEnum::ShowCreateTag(node.clone());
        Self {
            base: BaseExecutor::new("ShowCreateTagExecutor", plan_node, qctx),
            node,
        }
    }
}

#[async_trait]
impl Executor for ShowCreateTagExecutor {
    async fn execute(&mut self) -> DBResult<()> {
        let qctx = self.base.qctx().clone();
        let space_id = qctx.space_id()?;
        let schema = qctx
            .meta_client()
            .get_tag_schema(space_id, self.node.name())
            .await
            .map_err(|e| {
                log::error!(
                    "SpaceId: {}, ShowCreate tag `{}' failed: {}",
                    space_id,
                    self.node.name(),
                    e
                );
                DBError::from(e)
            })?;
        self.base.finish(
            ResultBuilder::new()
                .value(to_show_create_schema(true, self.node.name(), &schema))
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
pub struct DropTagExecutor {
    base: BaseExecutor,
    node: DropSchemaNode,
}

impl DropTagExecutor {
    pub fn new(node: DropSchemaNode, qctx: Arc<QueryContext>) -> Self {
        let plan_node = PlanNodeEnum::DropTag(node.clone());
        Self {
            base: BaseExecutor::new("DropTagExecutor", plan_node, qctx),
            node,
        }
    }
}

#[async_trait]
impl Executor for DropTagExecutor {
    async fn execute(&mut self) -> DBResult<()> {
        let qctx = self.base.qctx().clone();
        let space_id = qctx.space_id()?;
        qctx.meta_client()
            .drop_tag_schema(space_id, self.node.name(), self.node.if_exists())
            .await
            .map_err(|e| {
                log::error!(
                    "SpaceId: {}, Drop tag `{}' failed: {}",
                    space_id,
                    self.node.name(),
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

/// 名字去重并按字典序输出
#[derive(Debug)]
pub struct ShowTagsExecutor {
    base: BaseExecutor,
}

impl ShowTagsExecutor {
    pub fn new(node: ShowSchemasNode, qctx: Arc<QueryContext>) -> Self {
        Self {
            base: BaseExecutor::new("ShowTagsExecutor", PlanNodeEnum::ShowTags(node), qctx),
        }
    }
}

#[async_trait]
impl Executor for ShowTagsExecutor {
    async fn execute(&mut self) -> DBResult<()> {
        let qctx = self.base.qctx().clone();
        let space_id = qctx.space_id()?;
        let tags = qctx
            .meta_client()
            .list_tag_schemas(space_id)
            .await
            .map_err(|e| {
                log::error!("SpaceId: {}, Show tags failed: {}", space_id, e);
                DBError::from(e)
            })?;

        let names: BTreeSet<String> = tags.into_iter().map(|t| t.tag_name).collect();
        let mut ds = DataSet::with_columns(["Name"]);
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

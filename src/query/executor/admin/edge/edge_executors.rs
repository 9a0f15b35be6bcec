//! Edge schema 执行器
//!
//! 每个执行器向元数据服务发起一次请求；远程调用失败时记录空间与 edge 名后原样返回

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
pub struct CreateEdgeExecutor {
    base: BaseExecutor,
    node: CreateSchemaNode,
}

impl CreateEdgeExecutor {
    pub fn new(node: CreateSchemaNode, qctx: Arc<QueryContext>) -> Self {
        let plan_node = PlanNodeEnum::CreateEdge(node.clone());
        Self {
            base: BaseExecutor::new("CreateEdgeExecutor", plan_node, qctx),
            node,
        }
    }
}

#[async_trait]
impl Executor for CreateEdgeExecutor {
    async fn execute(&mut self) -> DBResult<()> {
        let qctx = self.base.qctx().clone();
        let space_id = qctx.space_id()?;
        qctx.meta_client()
            .create_edge_schema(
                space_id,
                self.node.name(),
                self.node.schema(),
                self.node.if_not_exists(),
            )
            .await
            .map_err(|e| {
                log::error!(
                    "SpaceId: {}, Create edge `{}' failed: {}",
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
pub struct AlterEdgeExecutor {
    base: BaseExecutor,
    node: AlterSchemaNode,
}

impl AlterEdgeExecutor {
    pub fn new(node: AlterSchemaNode, qctx: Arc<QueryContext>) -> Self {
        let plan_node = PlanNodeEnum::AlterEdge(node.clone());
        Self {
            base: BaseExecutor::new("AlterEdgeExecutor", plan_node, qctx),
            node,
        }
    }
}

#[async_trait]
impl Executor for AlterEdgeExecutor {
    async fn execute(&mut self) -> DBResult<()> {
        let qctx = self.base.qctx().clone();
        let space_id = self.node.space();
        qctx.meta_client()
            .alter_edge_schema(
                space_id,
                self.node.name(),
                self.node.items(),
                self.node.schema_prop(),
            )
            .await
            .map_err(|e| {
                log::error!(
                    "SpaceId: {}, Alter edge `{}' failed: {}",
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

/// DESC EDGE 与 SHOW CREATE EDGE 共用同一个描述节点，仅输出格式不同
#[derive(Debug)]
pub struct DescEdgeExecutor {
    base: BaseExecutor,
    node: DescSchemaNode,
}

impl DescEdgeExecutor {
    pub fn new(node: DescSchemaNode, qctx: Arc<QueryContext>) -> Self {
        let plan_node = PlanNodeEnum::DescEdge(node.clone());
        Self {
            base: BaseExecutor::new("DescEdgeExecutor", plan_node, qctx),
            node,
        }
    }
}

#[async_trait]
impl Executor for DescEdgeExecutor {
    async fn execute(&mut self) -> DBResult<()> {
        let qctx = self.base.qctx().clone();
        let space_id = qctx.space_id()?;
        let schema = qctx
            .meta_client()
            .get_edge_schema(space_id, self.node.name())
            .await
            .map_err(|e| {
                log::error!(
                    "SpaceId: {}, Desc edge `{}' failed: {}",
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
pub struct ShowCreateEdgeExecutor {
    base: BaseExecutor,
    node: DescSchemaNode,
}

impl ShowCreateEdgeExecutor {
    pub fn new(node: DescSchemaNode, qctx: Arc<QueryContext>) -> Self {
        let plan_node = PlanNodeEnum::ShowCreateEdge(node.clone());
        Self {
            base: BaseExecutor::new("ShowCreateEdgeExecutor", plan_node, qctx),
            node,
        }
    }
}

#[async_trait]
impl Executor for ShowCreateEdgeExecutor {
    async fn execute(&mut self) -> DBResult<()> {
        let qctx = self.base.qctx().clone();
        let space_id = qctx.space_id()?;
        let schema = qctx
            .meta_client()
            .get_edge_schema(space_id, self.node.name())
            .await
            .map_err(|e| {
                log::error!(
                    "SpaceId: {}, ShowCreate edge `{}' failed: {}",
                    space_id,
                    self.node.name(),
                    e
                );
                DBError::from(e)
            })?;
        self.base.finish(
            ResultBuilder::new()
                .value(to_show_create_schema(false, self.node.name(), &schema))
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
pub struct DropEdgeExecutor {
    base: BaseExecutor,
    node: DropSchemaNode,
}

impl DropEdgeExecutor {
    pub fn new(node: DropSchemaNode, qctx: Arc<QueryContext>) -> Self {
        let plan_node = PlanNodeEnum::DropEdge(node.clone());
        Self {
            base: BaseExecutor::new("DropEdgeExecutor", plan_node, qctx),
            node,
        }
    }
}

#[async_trait]
impl Executor for DropEdgeExecutor {
    async fn execute(&mut self) -> DBResult<()> {
        let qctx = self.base.qctx().clone();
        let space_id = qctx.space_id()?;
        qctx.meta_client()
            .drop_edge_schema(space_id, self.node.name(), self.node.if_exists())
            .await
            .map_err(|e| {
                log::error!(
                    "SpaceId: {}, Drop edge `{}' failed: {}",
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
pub struct ShowEdgesExecutor {
    base: BaseExecutor,
}

impl ShowEdgesExecutor {
    pub fn new(node: ShowSchemasNode, qctx: Arc<QueryContext>) -> Self {
        Self {
            base: BaseExecutor::new("ShowEdgesExecutor", PlanNodeEnum::ShowEdges(node), qctx),
        }
    }
}

#[async_trait]
impl Executor for ShowEdgesExecutor {
    async fn execute(&mut self) -> DBResult<()> {
        let qctx = self.base.qctx().clone();
        let space_id = qctx.space_id()?;
        let edges = qctx
            .meta_client()
            .list_edge_schemas(space_id)
            .await
            .map_err(|e| {
                log::error!("SpaceId: {}, Show edges failed: {}", space_id, e);
                DBError::from(e)
            })?;

        let names: BTreeSet<String> = edges.into_iter().map(|e| e.edge_name).collect();
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

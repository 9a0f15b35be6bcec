//! 基础执行器实现
//!
//! `Executor` 是调度器驱动的统一接口，`BaseExecutor` 保存每个执行器都需要的
//! 计划节点、查询上下文和统计信息。

use async_trait::async_trait;
use std::sync::Arc;

use super::executor_stats::ExecutorStats;
use crate::core::error::DBResult;
use crate::core::result::{IteratorKind, Result, ResultBuilder};
use crate::core::DataSet;
use crate::query::context::QueryContext;
use crate::query::planner::plan::{PlanNodeEnum, StartNode};

/// 统一的执行器 trait
///
/// `execute` 至多发起一次远程调用，并只在该调用处挂起
#[async_trait]
pub trait Executor: Send + Sync {
    async fn execute(&mut self) -> DBResult<()>;

    fn base(&self) -> &BaseExecutor;

    fn base_mut(&mut self) -> &mut BaseExecutor;

    fn id(&self) -> i64 {
        self.base().id()
    }

    fn name(&self) -> &str {
        self.base().name()
    }

    fn stats(&self) -> &ExecutorStats {
        self.base().stats()
    }

    fn stats_mut(&mut self) -> &mut ExecutorStats {
        self.base_mut().stats_mut()
    }
}

pub struct BaseExecutor {
    name: String,
    node: PlanNodeEnum,
    qctx: Arc<QueryContext>,
    stats: ExecutorStats,
}

impl BaseExecutor {
    pub fn new(name: impl Into<String>, node: PlanNodeEnum, qctx: Arc<QueryContext>) -> Self {
        Self {
            name: name.into(),
            node,
            qctx,
            stats: ExecutorStats::new(),
        }
    }

    /// 执行器ID与计划节点ID相同
    pub fn id(&self) -> i64 {
        self.node.id()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node(&self) -> &PlanNodeEnum {
        &self.node
    }

    pub fn qctx(&self) -> &Arc<QueryContext> {
        &self.qctx
    }

    pub fn stats(&self) -> &ExecutorStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut ExecutorStats {
        &mut self.stats
    }

    /// 把结果写入节点的输出变量
    pub fn finish(&mut self, result: Result) -> DBResult<()> {
        self.stats.add_row(result.row_count());
        self.qctx.set_result(self.node.output_var(), result);
        Ok(())
    }
}

impl std::fmt::Debug for BaseExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseExecutor")
            .field("name", &self.name)
            .field("node", &self.node.name())
            .field("id", &self.id())
            .finish()
    }
}

/// 开始执行器
///
/// 计划链的叶子，产生一个空结果集
#[derive(Debug)]
pub struct StartExecutor {
    base: BaseExecutor,
}

impl StartExecutor {
    pub fn new(node: StartNode, qctx: Arc<QueryContext>) -> Self {
        Self {
            base: BaseExecutor::new("StartExecutor", PlanNodeEnum::Start(node), qctx),
        }
    }
}

#[async_trait]
impl Executor for StartExecutor {
    async fn execute(&mut self) -> DBResult<()> {
        self.base.finish(
            ResultBuilder::new()
                .value(DataSet::new())
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

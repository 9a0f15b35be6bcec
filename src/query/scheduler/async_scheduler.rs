//! 异步调度器
//!
//! 沿执行计划的输入链从叶子到根依次运行执行器。同一时刻至多一个远程调用在途，
//! 任一执行器失败即停止，查询被终止后不再启动新的执行器。

use std::sync::Arc;
use std::time::Instant;

use crate::core::error::{DBError, DBResult};
use crate::core::result::Result;
use crate::query::context::QueryContext;
use crate::query::executor::factory::ExecutorFactory;

#[derive(Debug, Default, Clone, Copy)]
pub struct AsyncScheduler;

impl AsyncScheduler {
    pub fn new() -> Self {
        Self
    }

    /// 执行查询上下文中的计划，返回根节点输出变量的结果
    pub async fn schedule(&self, qctx: Arc<QueryContext>) -> DBResult<Result> {
        let plan = qctx.plan();
        let pool = qctx.obj_pool();
        let max_nodes = qctx.config().max_plan_nodes;
        if pool.len() > max_nodes {
            return Err(DBError::Plan(format!(
                "计划节点数 {} 超过上限 {}",
                pool.len(),
                max_nodes
            )));
        }

        let root = plan
            .root()
            .ok_or_else(|| DBError::Plan(format!("计划 {} 没有根节点", plan.id())))?;
        let mut chain = plan.chain(pool)?;
        chain.reverse();
        log::debug!("Scheduling plan {} with {} executors", plan.id(), chain.len());

        for node_ref in chain {
            if qctx.is_killed() {
                log::info!("Plan {} killed, skip remaining executors", plan.id());
                return Err(DBError::Killed);
            }

            let total_start = Instant::now();
            let mut executor = ExecutorFactory::create(node_ref, &qctx)?;
            log::trace!("Execute {}[id:{}]", executor.name(), executor.id());

            let exec_start = Instant::now();
            let status = executor.execute().await;
            executor.stats_mut().add_exec_time(exec_start.elapsed());
            executor.stats_mut().add_total_time(total_start.elapsed());

            if let Err(e) = status {
                log::debug!(
                    "{}[id:{}] failed: {}",
                    executor.name(),
                    executor.id(),
                    e
                );
                return Err(e);
            }
            log::trace!(
                "{}[id:{}] finished, {}",
                executor.name(),
                executor.id(),
                executor.stats().to_formatted_string()
            );
        }

        let root_var = qctx.node(root)?.output_var().to_string();
        qctx.get_result(&root_var)
            .ok_or_else(|| DBError::Execution(format!("变量 `{}' 尚无结果", root_var)))
    }
}

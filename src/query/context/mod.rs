//! 查询上下文模块
//!
//! - `request_context.rs` - 会话与请求
//! - `execution/` - 变量到执行结果的映射
//!
//! [`QueryContext`] 聚合一次查询执行所需的全部资源，对执行器可见。

pub mod execution;
pub mod request_context;

pub use execution::ExecutionContext;
pub use request_context::{RequestContext, Session, SpaceInfo};

use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::QueryConfig;
use crate::core::error::{DBError, DBResult};
use crate::core::result::Result;
use crate::query::planner::plan::{ExecutionPlan, NodeRef, PlanNodeEnum, PlanNodePool};
use crate::storage::metadata::{GraphSpaceId, MetaClient};

/// 查询上下文
///
/// 计划节点对象池与执行计划在构造时交入，此后只读；
/// 执行结果与状态标记可在执行期间并发更新。
pub struct QueryContext {
    rctx: RequestContext,
    meta_client: Arc<dyn MetaClient>,
    config: QueryConfig,
    obj_pool: PlanNodePool,
    plan: ExecutionPlan,
    ectx: RwLock<ExecutionContext>,
    partial_success: AtomicBool,
    killed: AtomicBool,
}

impl QueryContext {
    pub fn new(
        rctx: RequestContext,
        meta_client: Arc<dyn MetaClient>,
        config: QueryConfig,
        obj_pool: PlanNodePool,
        plan: ExecutionPlan,
    ) -> Self {
        Self {
            rctx,
            meta_client,
            config,
            obj_pool,
            plan,
            ectx: RwLock::new(ExecutionContext::new()),
            partial_success: AtomicBool::new(false),
            killed: AtomicBool::new(false),
        }
    }

    pub fn rctx(&self) -> &RequestContext {
        &self.rctx
    }

    pub fn meta_client(&self) -> &Arc<dyn MetaClient> {
        &self.meta_client
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn obj_pool(&self) -> &PlanNodePool {
        &self.obj_pool
    }

    pub fn plan(&self) -> &ExecutionPlan {
        &self.plan
    }

    /// 按句柄取计划节点
    pub fn node(&self, r: NodeRef) -> DBResult<&PlanNodeEnum> {
        self.obj_pool
            .get(r)
            .ok_or_else(|| DBError::Plan(format!("无效的计划节点句柄 {}", r)))
    }

    /// 会话当前图空间的 ID
    pub fn space_id(&self) -> DBResult<GraphSpaceId> {
        self.rctx
            .session()
            .space
            .as_ref()
            .map(|s| s.id)
            .ok_or_else(|| DBError::Execution("未选择图空间".to_string()))
    }

    pub fn ectx(&self) -> &RwLock<ExecutionContext> {
        &self.ectx
    }

    /// 写入变量结果
    pub fn set_result(&self, var: &str, result: Result) {
        self.ectx.write().set_result(var, result);
    }

    /// 读取变量的最新结果
    pub fn get_result(&self, var: &str) -> Option<Result> {
        self.ectx.read().get_result(var).cloned()
    }

    /// 标记为部分成功
    pub fn set_partial_success(&self) {
        self.partial_success.store(true, Ordering::SeqCst);
        log::warn!("Query marked as partial success");
    }

    pub fn is_partial_success(&self) -> bool {
        self.partial_success.load(Ordering::SeqCst)
    }

    /// 标记为已终止
    pub fn mark_killed(&self) {
        self.killed.store(true, Ordering::SeqCst);
        log::info!("Query context marked as killed");
    }

    pub fn is_killed(&self) -> bool {
        self.killed.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ResultBuilder;
    use crate::storage::metadata::MemoryMetaClient;

    fn qctx(session: Session) -> QueryContext {
        QueryContext::new(
            RequestContext::new(session, "SHOW TAGS"),
            Arc::new(MemoryMetaClient::new()),
            QueryConfig::default(),
            PlanNodePool::new(),
            ExecutionPlan::new(None),
        )
    }

    #[test]
    fn test_space_id_requires_space() {
        let ctx = qctx(Session::new(1));
        assert!(matches!(ctx.space_id(), Err(DBError::Execution(_))));

        let ctx = qctx(Session::new(1).with_space(SpaceInfo::new(7, "nba")));
        assert_eq!(ctx.space_id().ok(), Some(7));
    }

    #[test]
    fn test_flags() {
        let ctx = qctx(Session::new(1));
        assert!(!ctx.is_partial_success());
        assert!(!ctx.is_killed());
        ctx.set_partial_success();
        ctx.mark_killed();
        assert!(ctx.is_partial_success());
        assert!(ctx.is_killed());
    }

    #[test]
    fn test_results() {
        let ctx = qctx(Session::new(1));
        ctx.set_result("v", ResultBuilder::new().value("x").finish());
        assert_eq!(
            ctx.get_result("v").map(|r| r.into_value()),
            Some(crate::core::Value::from("x"))
        );
    }
}

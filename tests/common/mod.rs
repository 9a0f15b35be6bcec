//! 集成测试共享工具
//!
//! 构造带元数据客户端与会话空间的查询上下文，并通过调度器运行 DDL 计划

#![allow(dead_code)]

use std::sync::Arc;

use graphdb_exec::config::QueryConfig;
use graphdb_exec::core::error::DBResult;
use graphdb_exec::core::result::Result;
use graphdb_exec::core::Value;
use graphdb_exec::query::context::{QueryContext, RequestContext, Session, SpaceInfo};
use graphdb_exec::query::planner::plan::PlanNodePool;
use graphdb_exec::query::planner::{MaintainPlanner, MaintainSentence};
use graphdb_exec::query::scheduler::AsyncScheduler;
use graphdb_exec::storage::metadata::{GraphSpaceId, MemoryMetaClient};

pub const SPACE: GraphSpaceId = 1;

/// 带一个图空间的内存元数据客户端
pub fn meta_client() -> Arc<MemoryMetaClient> {
    let meta = Arc::new(MemoryMetaClient::new());
    meta.add_space(SPACE);
    meta
}

/// 规划并执行一条 DDL 语句
pub async fn run(meta: &Arc<MemoryMetaClient>, sentence: MaintainSentence) -> DBResult<Result> {
    run_with_config(meta, sentence, QueryConfig::default()).await
}

pub async fn run_with_config(
    meta: &Arc<MemoryMetaClient>,
    sentence: MaintainSentence,
    config: QueryConfig,
) -> DBResult<Result> {
    let mut pool = PlanNodePool::new();
    let plan = MaintainPlanner::new().transform(sentence, SPACE, &mut pool);
    let session = Session::new(1).with_space(SpaceInfo::new(SPACE, "test_space"));
    let qctx = QueryContext::new(
        RequestContext::new(session, ""),
        meta.clone(),
        config,
        pool,
        plan,
    );
    AsyncScheduler::new().schedule(Arc::new(qctx)).await
}

/// 结果集第一列的全部值
pub fn first_column(result: &Result) -> Vec<Value> {
    result
        .value()
        .as_dataset()
        .map(|ds| ds.rows.iter().map(|r| r[0].clone()).collect())
        .unwrap_or_default()
}

pub fn strings(values: &[&str]) -> Vec<Value> {
    values.iter().map(|v| Value::from(*v)).collect()
}

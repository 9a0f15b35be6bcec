//! 存储响应处理集成测试
//!
//! 测试范围:
//! - 多分片响应的完整度判定
//! - 分片错误码到错误信息的映射
//! - 部分成功标记在查询上下文中的传播

use std::sync::Arc;

use graphdb_exec::config::QueryConfig;
use graphdb_exec::core::error::{DBError, StorageError, StorageErrorCategory};
use graphdb_exec::core::result::ResultState;
use graphdb_exec::core::{DataSet, Value};
use graphdb_exec::query::context::{QueryContext, RequestContext, Session, SpaceInfo};
use graphdb_exec::query::executor::base::{handle_completeness, QueryStorageExecutor};
use graphdb_exec::query::planner::plan::{ExecutionPlan, PlanNodeEnum, PlanNodePool, StartNode};
use graphdb_exec::storage::{MemoryMetaClient, StorageErrorCode, StorageRpcResponse};

fn response(total: usize, failures: &[(i32, StorageErrorCode)]) -> StorageRpcResponse<DataSet> {
    let mut resp = StorageRpcResponse::new(total);
    for &(part, code) in failures {
        resp.mark_failure(part, code);
    }
    resp
}

fn executor(config: QueryConfig) -> (Arc<QueryContext>, QueryStorageExecutor, String) {
    let mut pool = PlanNodePool::new();
    let start = PlanNodeEnum::Start(StartNode::new()).make(&mut pool);
    let node = pool.get(start).cloned().expect("start node");
    let var = node.output_var().to_string();
    let qctx = Arc::new(QueryContext::new(
        RequestContext::new(
            Session::new(1).with_space(SpaceInfo::new(1, "nba")),
            "GO FROM \"Tim\" OVER like",
        ),
        Arc::new(MemoryMetaClient::new()),
        config,
        pool,
        ExecutionPlan::new(Some(start)),
    ));
    let exec = QueryStorageExecutor::new("GetNeighborsExecutor", node, qctx.clone());
    (qctx, exec, var)
}

#[test]
fn test_partial_success_when_allowed() {
    let config = QueryConfig {
        accept_partial_success: true,
        ..QueryConfig::default()
    };
    let (qctx, mut exec, var) = executor(config);
    let resp = response(
        4,
        &[
            (1, StorageErrorCode::LeaderChanged),
            (3, StorageErrorCode::LeaderChanged),
        ],
    );
    let mut ds = DataSet::with_columns(["_vid"]);
    ds.add_row(vec![Value::from("Tim")]);
    exec.finish_response(&resp, ds).expect("partial success");

    assert!(qctx.is_partial_success());
    let result = qctx.get_result(&var).expect("result");
    assert_eq!(result.state(), ResultState::PartialSuccess);
    assert_eq!(result.row_count(), 1);
}

#[test]
fn test_partial_failure_rejected_by_default() {
    let (qctx, mut exec, var) = executor(QueryConfig::default());
    let resp = response(4, &[(2, StorageErrorCode::LeaderChanged)]);
    let err = exec
        .finish_response(&resp, DataSet::new())
        .expect_err("complete result required");

    assert_eq!(err, DBError::Storage(StorageError::LeaderChanged));
    assert!(err.is_storage_error());
    assert!(!qctx.is_partial_success());
    assert!(qctx.get_result(&var).is_none());
}

#[test]
fn test_total_failure_reports_first_arrival() {
    let resp = response(
        3,
        &[
            (3, StorageErrorCode::SpaceNotFound),
            (1, StorageErrorCode::InvalidVid),
            (2, StorageErrorCode::InvalidVid),
        ],
    );
    let err = handle_completeness("GetVertices", &resp, false).expect_err("all parts failed");
    match err {
        DBError::Storage(e) => {
            assert_eq!(e, StorageError::SpaceNotFound);
            assert_eq!(e.category(), StorageErrorCategory::NotFound);
            assert_eq!(e.to_string(), "Storage Error: Space not found.");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_filter_out_everywhere_is_success() {
    let resp = response(
        2,
        &[
            (1, StorageErrorCode::FilterOut),
            (2, StorageErrorCode::FilterOut),
        ],
    );
    assert_eq!(
        handle_completeness("GetNeighbors", &resp, true),
        Ok(ResultState::Success)
    );
}

#[test]
fn test_unmapped_code_message() {
    let resp = response(1, &[(9, StorageErrorCode::Unknown)]);
    let err = handle_completeness("GetProps", &resp, true).expect_err("unmapped code");
    assert_eq!(
        err.to_string(),
        "Storage Error: part: 9, error code: -100."
    );
}

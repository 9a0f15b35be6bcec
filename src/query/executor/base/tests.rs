use std::sync::Arc;

use super::*;
use crate::config::QueryConfig;
use crate::core::error::{DBError, StorageError, StorageErrorCategory};
use crate::core::result::ResultState;
use crate::core::{DataSet, Value};
use crate::query::context::{QueryContext, RequestContext, Session, SpaceInfo};
use crate::query::planner::plan::{ExecutionPlan, PlanNode, PlanNodeEnum, PlanNodePool, StartNode};
use crate::storage::error_code::StorageErrorCode;
use crate::storage::metadata::MemoryMetaClient;
use crate::storage::rpc_response::StorageRpcResponse;

fn response(total: usize, failures: &[(i32, StorageErrorCode)]) -> StorageRpcResponse<()> {
    let mut resp = StorageRpcResponse::new(total);
    for &(part, code) in failures {
        resp.mark_failure(part, code);
    }
    resp
}

fn qctx(config: QueryConfig) -> (Arc<QueryContext>, PlanNodeEnum) {
    let mut pool = PlanNodePool::new();
    let start = PlanNodeEnum::Start(StartNode::new()).make(&mut pool);
    let node = pool.get(start).cloned().expect("start node");
    let ctx = QueryContext::new(
        RequestContext::new(Session::new(1).with_space(SpaceInfo::new(1, "nba")), "GO"),
        Arc::new(MemoryMetaClient::new()),
        config,
        pool,
        ExecutionPlan::new(Some(start)),
    );
    (Arc::new(ctx), node)
}

#[test]
fn test_full_completeness_is_success() {
    let resp = response(3, &[]);
    for require in [true, false] {
        assert_eq!(
            handle_completeness("GetNeighbors", &resp, require).ok(),
            Some(ResultState::Success)
        );
    }
}

#[test]
fn test_zero_completeness_fails_with_first_code() {
    let resp = response(
        2,
        &[
            (2, StorageErrorCode::EdgeNotFound),
            (1, StorageErrorCode::TagNotFound),
        ],
    );
    for require in [true, false] {
        let err = handle_completeness("GetProps", &resp, require).expect_err("total failure");
        assert_eq!(err, DBError::Storage(StorageError::EdgeNotFound));
    }
}

#[test]
fn test_partial_completeness() {
    let resp = response(4, &[(3, StorageErrorCode::LeaderChanged)]);
    assert_eq!(resp.completeness(), 75);

    assert_eq!(
        handle_completeness("GetProps", &resp, false).ok(),
        Some(ResultState::PartialSuccess)
    );

    let err = handle_completeness("GetProps", &resp, true).expect_err("complete required");
    assert_eq!(err.to_string(), "Storage Error: Leader changed.");
}

#[test]
fn test_filter_out_is_not_an_error() {
    let resp = response(1, &[(1, StorageErrorCode::FilterOut)]);
    assert_eq!(resp.completeness(), 0);
    assert_eq!(
        handle_completeness("GetNeighbors", &resp, true).ok(),
        Some(ResultState::Success)
    );
}

#[test]
fn test_no_partitions() {
    let resp = response(0, &[]);
    assert!(matches!(
        handle_completeness("GetNeighbors", &resp, false),
        Err(DBError::Execution(_))
    ));
}

#[test]
fn test_error_code_mapping() {
    let cases = [
        (StorageErrorCode::InvalidVid, StorageError::InvalidVid),
        (StorageErrorCode::InvalidFieldValue, StorageError::InvalidFieldValue),
        (StorageErrorCode::InvalidFilter, StorageError::InvalidFilter),
        (StorageErrorCode::InvalidUpdater, StorageError::InvalidUpdater),
        (StorageErrorCode::InvalidSpaceVidLen, StorageError::InvalidSpaceVidLen),
        (StorageErrorCode::SpaceNotFound, StorageError::SpaceNotFound),
        (StorageErrorCode::TagPropNotFound, StorageError::TagPropNotFound),
        (StorageErrorCode::EdgePropNotFound, StorageError::EdgePropNotFound),
        (StorageErrorCode::IndexNotFound, StorageError::IndexNotFound),
        (StorageErrorCode::InvalidData, StorageError::InvalidData),
        (StorageErrorCode::NotNullable, StorageError::NotNullable),
        (StorageErrorCode::FieldUnset, StorageError::FieldUnset),
        (StorageErrorCode::OutOfRange, StorageError::OutOfRange),
        (StorageErrorCode::AtomicOpFailed, StorageError::AtomicOpFailed),
    ];
    for (code, expected) in cases {
        assert_eq!(handle_error_code(code, 1), Err(DBError::Storage(expected)));
    }
}

#[test]
fn test_unmapped_code_keeps_part_and_code() {
    let err = handle_error_code(StorageErrorCode::PartNotFound, 9).expect_err("unmapped");
    match err {
        DBError::Storage(e) => {
            assert_eq!(e.category(), StorageErrorCategory::Unmapped);
            assert_eq!(e.to_string(), "Storage Error: part: 9, error code: -14.");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_storage_executor_marks_partial_success() {
    let mut config = QueryConfig::default();
    config.accept_partial_success = true;
    let (ctx, node) = qctx(config);
    let var = node.output_var().to_string();
    let mut exec = QueryStorageExecutor::new("GetPropsExecutor", node, ctx.clone());
    assert!(!exec.is_complete_require());

    let resp = response(2, &[(1, StorageErrorCode::LeaderChanged)]);
    exec.finish_response(&resp, DataSet::with_columns(["id"]))
        .expect("partial success");

    assert!(ctx.is_partial_success());
    let result = ctx.get_result(&var).expect("result written");
    assert_eq!(result.state(), ResultState::PartialSuccess);
    assert!(result.value().as_dataset().is_some());
}

#[test]
fn test_storage_executor_requires_complete_by_default() {
    let (ctx, node) = qctx(QueryConfig::default());
    let var = node.output_var().to_string();
    let mut exec = QueryStorageExecutor::new("GetPropsExecutor", node, ctx.clone());
    assert!(exec.is_complete_require());

    let resp = response(2, &[(1, StorageErrorCode::AtomicOpFailed)]);
    let err = exec
        .finish_response(&resp, Value::Empty)
        .expect_err("complete required");
    assert_eq!(err, DBError::Storage(StorageError::AtomicOpFailed));
    assert!(!ctx.is_partial_success());
    assert!(ctx.get_result(&var).is_none());
}

#[test]
fn test_storage_executor_override() {
    let (ctx, node) = qctx(QueryConfig::default());
    let exec = QueryStorageExecutor::new("GetPropsExecutor", node, ctx)
        .with_complete_require(false);
    let resp = response(3, &[(2, StorageErrorCode::InvalidVid)]);
    assert_eq!(
        exec.handle_completeness(&resp).ok(),
        Some(ResultState::PartialSuccess)
    );
}

#[tokio::test]
async fn test_start_executor_emits_empty_dataset() {
    let (qctx, node) = qctx(QueryConfig::default());
    let start = match node {
        PlanNodeEnum::Start(n) => n,
        other => panic!("unexpected node {}", other.name()),
    };
    let var = start.output_var().to_string();
    let mut exec = StartExecutor::new(start, qctx.clone());
    exec.execute().await.expect("start");

    let result = qctx.get_result(&var).expect("start result");
    assert_eq!(result.state(), ResultState::Success);
    assert_eq!(result.value(), &Value::DataSet(DataSet::new()));
    assert_eq!(exec.stats().num_rows, 0);
}

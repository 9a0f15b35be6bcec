//! 存储查询执行器基础
//!
//! 一次存储请求会扇出到多个分片。这里把分片级的结果归并成
//! 成功、部分成功或失败，并把分片错误码映射为用户可读的错误。

use std::sync::Arc;

use super::executor_base::BaseExecutor;
use crate::core::error::{DBError, DBResult, StorageError};
use crate::core::result::{ResultBuilder, ResultState};
use crate::core::Value;
use crate::query::context::QueryContext;
use crate::query::planner::plan::PlanNodeEnum;
use crate::storage::error_code::{PartitionId, StorageErrorCode};
use crate::storage::rpc_response::StorageRpcResponse;

/// 把单个分片错误码映射为错误
///
/// `E_FILTER_OUT` 表示数据被下推的过滤条件排除，不是错误
pub fn handle_error_code(code: StorageErrorCode, part_id: PartitionId) -> DBResult<()> {
    let err = match code {
        StorageErrorCode::FilterOut => return Ok(()),
        StorageErrorCode::InvalidVid => StorageError::InvalidVid,
        StorageErrorCode::InvalidFieldValue => StorageError::InvalidFieldValue,
        StorageErrorCode::LeaderChanged => StorageError::LeaderChanged,
        StorageErrorCode::InvalidFilter => StorageError::InvalidFilter,
        StorageErrorCode::InvalidUpdater => StorageError::InvalidUpdater,
        StorageErrorCode::InvalidSpaceVidLen => StorageError::InvalidSpaceVidLen,
        StorageErrorCode::SpaceNotFound => StorageError::SpaceNotFound,
        StorageErrorCode::TagNotFound => StorageError::TagNotFound,
        StorageErrorCode::TagPropNotFound => StorageError::TagPropNotFound,
        StorageErrorCode::EdgeNotFound => StorageError::EdgeNotFound,
        StorageErrorCode::EdgePropNotFound => StorageError::EdgePropNotFound,
        StorageErrorCode::IndexNotFound => StorageError::IndexNotFound,
        StorageErrorCode::InvalidData => StorageError::InvalidData,
        StorageErrorCode::NotNullable => StorageError::NotNullable,
        StorageErrorCode::FieldUnset => StorageError::FieldUnset,
        StorageErrorCode::OutOfRange => StorageError::OutOfRange,
        StorageErrorCode::AtomicOpFailed => StorageError::AtomicOpFailed,
        other => {
            log::error!("Storage Error: part: {}, error code: {}", part_id, other);
            StorageError::Unknown {
                part_id,
                code: other,
            }
        }
    };
    Err(DBError::Storage(err))
}

/// 根据完整度判定一次多分片请求的结果
///
/// - 完整度为 100 时成功
/// - 完整度为 0，或调用方要求完整结果时，以第一个失败分片的错误码失败
/// - 其余情况为部分成功
///
/// "第一个" 指失败分片的到达顺序，不按分片ID排序
pub fn handle_completeness<R>(
    executor_name: &str,
    resp: &StorageRpcResponse<R>,
    is_complete_require: bool,
) -> DBResult<ResultState> {
    let completeness = resp.completeness();
    if completeness == 100 {
        return Ok(ResultState::Success);
    }

    for (part_id, code) in resp.failed_parts() {
        log::error!(
            "{} failed, part {}, error code: {}",
            executor_name,
            part_id,
            code.name()
        );
    }

    if completeness == 0 || is_complete_require {
        return match resp.failed_parts().first() {
            Some(&(part_id, code)) => {
                handle_error_code(code, part_id)?;
                Ok(ResultState::Success)
            }
            None => Err(DBError::Execution(format!(
                "{}: no partition answered the request",
                executor_name
            ))),
        };
    }

    log::warn!(
        "{} partial success, completeness: {}",
        executor_name,
        completeness
    );
    Ok(ResultState::PartialSuccess)
}

/// 访问存储层的执行器基础
pub struct QueryStorageExecutor {
    base: BaseExecutor,
    is_complete_require: bool,
}

impl QueryStorageExecutor {
    /// 是否要求完整结果取自查询配置
    pub fn new(name: impl Into<String>, node: PlanNodeEnum, qctx: Arc<QueryContext>) -> Self {
        let is_complete_require = qctx.config().is_complete_require();
        Self {
            base: BaseExecutor::new(name, node, qctx),
            is_complete_require,
        }
    }

    /// 覆盖配置中的完整度要求
    pub fn with_complete_require(mut self, is_complete_require: bool) -> Self {
        self.is_complete_require = is_complete_require;
        self
    }

    pub fn is_complete_require(&self) -> bool {
        self.is_complete_require
    }

    pub fn base(&self) -> &BaseExecutor {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut BaseExecutor {
        &mut self.base
    }

    /// 判定响应结果；部分成功会记录到查询上下文
    pub fn handle_completeness<R>(&self, resp: &StorageRpcResponse<R>) -> DBResult<ResultState> {
        let state = handle_completeness(self.base.name(), resp, self.is_complete_require)?;
        if state == ResultState::PartialSuccess {
            self.base.qctx().set_partial_success();
        }
        Ok(state)
    }

    /// 判定响应结果并把 `value` 连同结果状态写入输出变量
    pub fn finish_response<R>(
        &mut self,
        resp: &StorageRpcResponse<R>,
        value: impl Into<Value>,
    ) -> DBResult<()> {
        let state = self.handle_completeness(resp)?;
        self.base
            .finish(ResultBuilder::new().value(value).state(state).finish())
    }
}

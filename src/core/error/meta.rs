//! 元数据服务错误类型
//!
//! 远程调用本身失败（传输层或服务层）时返回，执行层不再解释

use thiserror::Error;

use crate::storage::metadata::GraphSpaceId;

pub type MetaResult<T> = Result<T, MetaError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetaError {
    #[error("Space not found: {0}")]
    SpaceNotFound(GraphSpaceId),
    #[error("Tag not found: {0}")]
    TagNotFound(String),
    #[error("Edge not found: {0}")]
    EdgeNotFound(String),
    #[error("Index not found: {0}")]
    IndexNotFound(String),
    #[error("Existed: {0}")]
    Existed(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("RPC failure: {0}")]
    RpcFailure(String),
}

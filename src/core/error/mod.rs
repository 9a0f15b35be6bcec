//! 统一错误处理
//!
//! - 分片级存储错误映射为 `StorageError`，每个变体携带面向用户的消息
//! - 元数据服务（远程调用本身）的失败映射为 `MetaError`，原样向上传递
//! - `DBResult<T>` 是整个执行层统一的返回类型

use thiserror::Error;

pub mod meta;
pub mod storage;

pub use meta::{MetaError, MetaResult};
pub use storage::{StorageError, StorageErrorCategory, StorageResult};

/// 统一的数据库错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DBError {
    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("元数据服务错误: {0}")]
    Meta(#[from] MetaError),

    #[error("计划错误: {0}")]
    Plan(String),

    #[error("执行错误: {0}")]
    Execution(String),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("序列化错误: {0}")]
    Serialization(String),

    #[error("查询已被终止")]
    Killed,
}

impl DBError {
    /// 是否为分片级存储错误
    pub fn is_storage_error(&self) -> bool {
        matches!(self, DBError::Storage(_))
    }
}

/// 统一的结果类型
pub type DBResult<T> = Result<T, DBError>;

impl From<serde_json::Error> for DBError {
    fn from(err: serde_json::Error) -> Self {
        DBError::Serialization(err.to_string())
    }
}

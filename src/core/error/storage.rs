//! 存储层错误类型
//!
//! 分片错误码经执行层映射后的语义化错误

use thiserror::Error;

use crate::storage::error_code::{PartitionId, StorageErrorCode};

/// 存储层结果类型
pub type StorageResult<T> = Result<T, StorageError>;

/// 存储错误的语义类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageErrorCategory {
    NotFound,
    InvalidInput,
    ConstraintViolation,
    AtomicOpFailure,
    /// 可在其他副本上重试，本层不重试
    Retryable,
    Unmapped,
}

/// 存储层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage Error: Invalid vid.")]
    InvalidVid,
    #[error(
        "Storage Error: Invalid field value: may be the filed is not NULL or without default value or wrong schema."
    )]
    InvalidFieldValue,
    #[error("Storage Error: Leader changed.")]
    LeaderChanged,
    #[error("Storage Error: Invalid filter.")]
    InvalidFilter,
    #[error("Storage Error: Invalid Update col or yield col.")]
    InvalidUpdater,
    #[error("Storage Error: Invalid space vid len.")]
    InvalidSpaceVidLen,
    #[error("Storage Error: Space not found.")]
    SpaceNotFound,
    #[error("Storage Error: Tag not found.")]
    TagNotFound,
    #[error("Storage Error: Tag prop not found.")]
    TagPropNotFound,
    #[error("Storage Error: Edge not found.")]
    EdgeNotFound,
    #[error("Storage Error: Edge prop not found.")]
    EdgePropNotFound,
    #[error("Storage Error: Index not found.")]
    IndexNotFound,
    #[error("Storage Error: Invalid data, may be wrong value type.")]
    InvalidData,
    #[error("Storage Error: The not null field cannot be null.")]
    NotNullable,
    #[error("Storage Error: The not null field doesn't have a default value.")]
    FieldUnset,
    #[error("Storage Error: Out of range value.")]
    OutOfRange,
    #[error("Storage Error: Atomic operation failed.")]
    AtomicOpFailed,
    #[error("Storage Error: part: {part_id}, error code: {}.", .code.as_i32())]
    Unknown {
        part_id: PartitionId,
        code: StorageErrorCode,
    },
}

impl StorageError {
    pub fn category(&self) -> StorageErrorCategory {
        match self {
            StorageError::SpaceNotFound
            | StorageError::TagNotFound
            | StorageError::TagPropNotFound
            | StorageError::EdgeNotFound
            | StorageError::EdgePropNotFound
            | StorageError::IndexNotFound => StorageErrorCategory::NotFound,
            StorageError::InvalidVid
            | StorageError::InvalidFieldValue
            | StorageError::InvalidFilter
            | StorageError::InvalidUpdater
            | StorageError::InvalidSpaceVidLen
            | StorageError::InvalidData => StorageErrorCategory::InvalidInput,
            StorageError::NotNullable | StorageError::FieldUnset | StorageError::OutOfRange => {
                StorageErrorCategory::ConstraintViolation
            }
            StorageError::AtomicOpFailed => StorageErrorCategory::AtomicOpFailure,
            StorageError::LeaderChanged => StorageErrorCategory::Retryable,
            StorageError::Unknown { .. } => StorageErrorCategory::Unmapped,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.category() == StorageErrorCategory::Retryable
    }
}

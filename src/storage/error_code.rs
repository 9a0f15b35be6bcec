//! 存储层错误码
//!
//! 分片级错误码，取值与存储服务协议保持一致

use serde::{Deserialize, Serialize};
use std::fmt;

/// 分片 ID
pub type PartitionId = i32;

/// 存储服务返回的分片错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageErrorCode {
    Succeeded,
    Disconnected,
    FailedToConnect,
    RpcFailure,
    LeaderChanged,
    KeyHasExists,
    SpaceNotFound,
    PartNotFound,
    KeyNotFound,
    ConsensusError,
    DataTypeMismatch,
    InvalidFieldValue,
    InvalidOperation,
    NotNullable,
    FieldUnset,
    OutOfRange,
    AtomicOpFailed,
    DataConflictError,
    EdgePropNotFound,
    TagPropNotFound,
    ImproperDataType,
    EdgeNotFound,
    TagNotFound,
    InvalidSpaceVidLen,
    IndexNotFound,
    InvalidFilter,
    InvalidUpdater,
    InvalidStore,
    InvalidPeer,
    RetryExhausted,
    InvalidVid,
    PartialResult,
    FilterOut,
    InvalidData,
    Unknown,
    /// 未登记的错误码，保留原始值
    Other(i32),
}

impl StorageErrorCode {
    /// 协议中的数值
    pub fn as_i32(&self) -> i32 {
        match self {
            StorageErrorCode::Succeeded => 0,
            StorageErrorCode::Disconnected => -1,
            StorageErrorCode::FailedToConnect => -2,
            StorageErrorCode::RpcFailure => -3,
            StorageErrorCode::LeaderChanged => -11,
            StorageErrorCode::KeyHasExists => -12,
            StorageErrorCode::SpaceNotFound => -13,
            StorageErrorCode::PartNotFound => -14,
            StorageErrorCode::KeyNotFound => -15,
            StorageErrorCode::ConsensusError => -16,
            StorageErrorCode::DataTypeMismatch => -17,
            StorageErrorCode::InvalidFieldValue => -18,
            StorageErrorCode::InvalidOperation => -20,
            StorageErrorCode::NotNullable => -21,
            StorageErrorCode::FieldUnset => -22,
            StorageErrorCode::OutOfRange => -23,
            StorageErrorCode::AtomicOpFailed => -24,
            StorageErrorCode::DataConflictError => -25,
            StorageErrorCode::EdgePropNotFound => -31,
            StorageErrorCode::TagPropNotFound => -32,
            StorageErrorCode::ImproperDataType => -33,
            StorageErrorCode::EdgeNotFound => -34,
            StorageErrorCode::TagNotFound => -35,
            StorageErrorCode::InvalidSpaceVidLen => -36,
            StorageErrorCode::IndexNotFound => -37,
            StorageErrorCode::InvalidFilter => -41,
            StorageErrorCode::InvalidUpdater => -42,
            StorageErrorCode::InvalidStore => -43,
            StorageErrorCode::InvalidPeer => -44,
            StorageErrorCode::RetryExhausted => -45,
            StorageErrorCode::InvalidVid => -48,
            StorageErrorCode::PartialResult => -71,
            StorageErrorCode::FilterOut => -81,
            StorageErrorCode::InvalidData => -82,
            StorageErrorCode::Unknown => -100,
            StorageErrorCode::Other(code) => *code,
        }
    }

    /// 根据数值获取错误码，未登记的值落入 `Other`
    pub fn from_i32(code: i32) -> Self {
        match code {
            0 => StorageErrorCode::Succeeded,
            -1 => StorageErrorCode::Disconnected,
            -2 => StorageErrorCode::FailedToConnect,
            -3 => StorageErrorCode::RpcFailure,
            -11 => StorageErrorCode::LeaderChanged,
            -12 => StorageErrorCode::KeyHasExists,
            -13 => StorageErrorCode::SpaceNotFound,
            -14 => StorageErrorCode::PartNotFound,
            -15 => StorageErrorCode::KeyNotFound,
            -16 => StorageErrorCode::ConsensusError,
            -17 => StorageErrorCode::DataTypeMismatch,
            -18 => StorageErrorCode::InvalidFieldValue,
            -20 => StorageErrorCode::InvalidOperation,
            -21 => StorageErrorCode::NotNullable,
            -22 => StorageErrorCode::FieldUnset,
            -23 => StorageErrorCode::OutOfRange,
            -24 => StorageErrorCode::AtomicOpFailed,
            -25 => StorageErrorCode::DataConflictError,
            -31 => StorageErrorCode::EdgePropNotFound,
            -32 => StorageErrorCode::TagPropNotFound,
            -33 => StorageErrorCode::ImproperDataType,
            -34 => StorageErrorCode::EdgeNotFound,
            -35 => StorageErrorCode::TagNotFound,
            -36 => StorageErrorCode::InvalidSpaceVidLen,
            -37 => StorageErrorCode::IndexNotFound,
            -41 => StorageErrorCode::InvalidFilter,
            -42 => StorageErrorCode::InvalidUpdater,
            -43 => StorageErrorCode::InvalidStore,
            -44 => StorageErrorCode::InvalidPeer,
            -45 => StorageErrorCode::RetryExhausted,
            -48 => StorageErrorCode::InvalidVid,
            -71 => StorageErrorCode::PartialResult,
            -81 => StorageErrorCode::FilterOut,
            -82 => StorageErrorCode::InvalidData,
            -100 => StorageErrorCode::Unknown,
            other => StorageErrorCode::Other(other),
        }
    }

    /// 协议中的名称，用于日志
    pub fn name(&self) -> &'static str {
        match self {
            StorageErrorCode::Succeeded => "SUCCEEDED",
            StorageErrorCode::Disconnected => "E_DISCONNECTED",
            StorageErrorCode::FailedToConnect => "E_FAILED_TO_CONNECT",
            StorageErrorCode::RpcFailure => "E_RPC_FAILURE",
            StorageErrorCode::LeaderChanged => "E_LEADER_CHANGED",
            StorageErrorCode::KeyHasExists => "E_KEY_HAS_EXISTS",
            StorageErrorCode::SpaceNotFound => "E_SPACE_NOT_FOUND",
            StorageErrorCode::PartNotFound => "E_PART_NOT_FOUND",
            StorageErrorCode::KeyNotFound => "E_KEY_NOT_FOUND",
            StorageErrorCode::ConsensusError => "E_CONSENSUS_ERROR",
            StorageErrorCode::DataTypeMismatch => "E_DATA_TYPE_MISMATCH",
            StorageErrorCode::InvalidFieldValue => "E_INVALID_FIELD_VALUE",
            StorageErrorCode::InvalidOperation => "E_INVALID_OPERATION",
            StorageErrorCode::NotNullable => "E_NOT_NULLABLE",
            StorageErrorCode::FieldUnset => "E_FIELD_UNSET",
            StorageErrorCode::OutOfRange => "E_OUT_OF_RANGE",
            StorageErrorCode::AtomicOpFailed => "E_ATOMIC_OP_FAILED",
            StorageErrorCode::DataConflictError => "E_DATA_CONFLICT_ERROR",
            StorageErrorCode::EdgePropNotFound => "E_EDGE_PROP_NOT_FOUND",
            StorageErrorCode::TagPropNotFound => "E_TAG_PROP_NOT_FOUND",
            StorageErrorCode::ImproperDataType => "E_IMPROPER_DATA_TYPE",
            StorageErrorCode::EdgeNotFound => "E_EDGE_NOT_FOUND",
            StorageErrorCode::TagNotFound => "E_TAG_NOT_FOUND",
            StorageErrorCode::InvalidSpaceVidLen => "E_INVALID_SPACEVIDLEN",
            StorageErrorCode::IndexNotFound => "E_INDEX_NOT_FOUND",
            StorageErrorCode::InvalidFilter => "E_INVALID_FILTER",
            StorageErrorCode::InvalidUpdater => "E_INVALID_UPDATER",
            StorageErrorCode::InvalidStore => "E_INVALID_STORE",
            StorageErrorCode::InvalidPeer => "E_INVALID_PEER",
            StorageErrorCode::RetryExhausted => "E_RETRY_EXHAUSTED",
            StorageErrorCode::InvalidVid => "E_INVALID_VID",
            StorageErrorCode::PartialResult => "E_PARTIAL_RESULT",
            StorageErrorCode::FilterOut => "E_FILTER_OUT",
            StorageErrorCode::InvalidData => "E_INVALID_DATA",
            StorageErrorCode::Unknown => "E_UNKNOWN",
            StorageErrorCode::Other(_) => "E_UNREGISTERED",
        }
    }
}

impl fmt::Display for StorageErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageErrorCode::Other(code) => write!(f, "{}({})", self.name(), code),
            _ => write!(f, "{}", self.name()),
        }
    }
}

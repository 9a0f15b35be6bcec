//! 存储层接口
//!
//! - `error_code` - 分片级错误码
//! - `rpc_response` - 多分片 RPC 聚合响应
//! - `metadata` - 元数据服务客户端

pub mod error_code;
pub mod metadata;
pub mod rpc_response;

pub use error_code::{PartitionId, StorageErrorCode};
pub use metadata::{MemoryMetaClient, MetaClient};
pub use rpc_response::StorageRpcResponse;

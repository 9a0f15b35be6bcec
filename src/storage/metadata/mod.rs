//! 元数据服务边界
//!
//! - `types` - schema 与索引描述
//! - `meta_client` - 元数据服务客户端接口
//! - `memory_meta_client` - 内存实现

pub mod memory_meta_client;
pub mod meta_client;
pub mod types;

pub use self::memory_meta_client::MemoryMetaClient;
pub use self::meta_client::MetaClient;
pub use self::types::*;

//! 管理类执行器
//!
//! - `tag` / `edge` - schema 的创建、修改、描述、删除和列出
//! - `index` - tag 与 edge 索引的创建、描述、删除和列出

pub mod edge;
pub mod index;
pub mod tag;

pub use edge::*;
pub use index::*;
pub use tag::*;

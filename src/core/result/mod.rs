//! 执行结果模块
//!
//! - `result_core.rs`    - 结果状态、迭代器种类和结果对象
//! - `result_builder.rs` - 结果构建器

pub mod result_builder;
pub mod result_core;

pub use result_builder::ResultBuilder;
pub use result_core::{IteratorKind, Result, ResultState};

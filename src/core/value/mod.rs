//! Value 模块 - 执行层使用的值类型
//!
//! - 核心类型定义 (`types.rs`)
//! - 数据集类型 (`dataset.rs`)

pub mod dataset;
pub mod types;

pub use dataset::*;
pub use types::*;

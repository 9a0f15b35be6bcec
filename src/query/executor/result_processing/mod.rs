//! 结果处理执行器模块
//!
//! - `filter` - 条件过滤

pub mod filter;
pub use filter::FilterExecutor;

//! 执行器基础类型
//!
//! - executor_stats.rs   - 执行器统计信息
//! - executor_base.rs    - Executor trait、基础执行器与开始执行器
//! - storage_executor.rs - 多分片存储响应的完整度处理

pub mod executor_base;
pub mod executor_stats;
pub mod storage_executor;

#[cfg(test)]
mod tests;

pub use executor_base::{BaseExecutor, Executor, StartExecutor};
pub use executor_stats::ExecutorStats;
pub use storage_executor::{handle_completeness, handle_error_code, QueryStorageExecutor};

//! 执行器模块
//!
//! - `base` - Executor trait、基础执行器与存储响应处理
//! - `admin` - schema 与索引的 DDL 执行器
//! - `result_processing` - 结果处理执行器
//! - `factory` - 由计划节点创建执行器

pub mod admin;
pub mod base;
pub mod factory;
pub mod result_processing;

pub use base::{BaseExecutor, Executor, ExecutorStats, QueryStorageExecutor, StartExecutor};
pub use factory::ExecutorFactory;
pub use result_processing::FilterExecutor;

//! 查询执行
//!
//! - `context` - 会话、请求与查询上下文
//! - `planner` - 计划节点、执行计划与规划器
//! - `executor` - 各计划节点对应的执行器
//! - `scheduler` - 按计划驱动执行器
//! - `visitor` - 表达式改写

pub mod context;
pub mod executor;
pub mod planner;
pub mod scheduler;
pub mod visitor;

pub use context::QueryContext;
pub use scheduler::AsyncScheduler;

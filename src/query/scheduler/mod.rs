//! 查询调度

pub mod async_scheduler;

pub use async_scheduler::AsyncScheduler;

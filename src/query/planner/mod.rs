//! 规划器模块
//!
//! 计划节点、执行计划以及由语句生成计划的规划器

pub mod ngql;
pub mod plan;

pub use ngql::{FilterPlanner, MaintainPlanner, MaintainSentence};
pub use plan::ExecutionPlan;

//! NGQL 规划器
//!
//! - `maintain_planner` - schema 与索引 DDL
//! - `filter_planner` - 过滤条件下推

pub mod filter_planner;
pub mod maintain_planner;

pub use filter_planner::FilterPlanner;
pub use maintain_planner::{MaintainPlanner, MaintainSentence};

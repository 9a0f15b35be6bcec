//! GraphDB 查询执行核心
//!
//! 分布式图数据库查询层中位于规划器与存储/元数据服务之间的部分：
//! 计划节点与执行计划、DDL 执行器、多分片存储响应的完整度处理，
//! 以及过滤条件下推用的表达式改写。

pub mod config;
pub mod core;
pub mod query;
pub mod storage;
pub mod utils;

//! Edge schema 管理执行器

mod edge_executors;


pub use edge_executors::{
    AlterEdgeExecutor, CreateEdgeExecutor, DescEdgeExecutor, DropEdgeExecutor, ShowCreateEdgeExecutor,
    ShowEdgesExecutor,
};

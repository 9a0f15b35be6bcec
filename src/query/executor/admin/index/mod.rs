//! 索引管理执行器

pub mod edge_index;
pub mod tag_index;

#[cfg(test)]
mod tests;

pub use edge_index::{
    CreateEdgeIndexExecutor, DescEdgeIndexExecutor, DropEdgeIndexExecutor,
    ShowCreateEdgeIndexExecutor, ShowEdgeIndexesExecutor,
};
pub use tag_index::{
    CreateTagIndexExecutor, DescTagIndexExecutor, DropTagIndexExecutor,
    ShowCreateTagIndexExecutor, ShowTagIndexesExecutor,
};

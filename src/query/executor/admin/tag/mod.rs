//! Tag schema 管理执行器

mod tag_executors;

#[cfg(test)]
mod tests;

pub use tag_executors::{
    AlterTagExecutor, CreateTagExecutor, DescTagExecutor, DropTagExecutor, ShowCreateTagExecutor,
    ShowTagsExecutor,
};

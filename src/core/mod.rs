//! 核心类型
//!
//! 值、表达式、执行结果与错误类型，执行层的其余模块都建立在这里之上

pub mod error;
pub mod expression_visitor;
pub mod result;
pub mod types;
pub mod value;

pub use error::{DBError, DBResult, MetaError, StorageError, StorageErrorCategory};
pub use expression_visitor::ExpressionVisitor;
pub use result::{IteratorKind, ResultBuilder, ResultState};
pub use types::{DataType, Expression};
pub use value::*;

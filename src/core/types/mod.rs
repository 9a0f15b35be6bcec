//! 核心类型模块
//!
//! 数据类型、操作符以及表达式树

pub mod expression;
pub mod operators;

use serde::{Deserialize, Serialize};
use std::fmt;

/// 属性数据类型
///
/// 用于 schema 列定义以及类型转换表达式
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    String,
    FixedString(usize),
    Timestamp,
    Date,
    Time,
    DateTime,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Bool => write!(f, "bool"),
            DataType::Int8 => write!(f, "int8"),
            DataType::Int16 => write!(f, "int16"),
            DataType::Int32 => write!(f, "int32"),
            DataType::Int64 => write!(f, "int64"),
            DataType::Float => write!(f, "float"),
            DataType::Double => write!(f, "double"),
            DataType::String => write!(f, "string"),
            DataType::FixedString(len) => write!(f, "fixed_string({})", len),
            DataType::Timestamp => write!(f, "timestamp"),
            DataType::Date => write!(f, "date"),
            DataType::Time => write!(f, "time"),
            DataType::DateTime => write!(f, "datetime"),
        }
    }
}

// 重新导出常用类型
pub use expression::Expression;
pub use operators::{ArithmeticOperator, LogicalOperator, RelationalOperator, UnaryOperator};

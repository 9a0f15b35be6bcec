//! 操作符类型定义
//!
//! 表达式树中一元、算术、关系和逻辑运算使用的操作符

use serde::{Deserialize, Serialize};
use std::fmt;

/// 一元操作符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOperator {
    Plus,
    Minus,
    Not,
    IsNull,
    IsNotNull,
    IsEmpty,
    IsNotEmpty,
}

impl UnaryOperator {
    /// 后缀形式的操作符（如 `IS NULL`）写在操作数之后
    pub fn is_postfix(&self) -> bool {
        matches!(
            self,
            UnaryOperator::IsNull
                | UnaryOperator::IsNotNull
                | UnaryOperator::IsEmpty
                | UnaryOperator::IsNotEmpty
        )
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
            UnaryOperator::Not => "!",
            UnaryOperator::IsNull => "IS NULL",
            UnaryOperator::IsNotNull => "IS NOT NULL",
            UnaryOperator::IsEmpty => "IS EMPTY",
            UnaryOperator::IsNotEmpty => "IS NOT EMPTY",
        };
        write!(f, "{}", s)
    }
}

/// 算术操作符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArithmeticOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ArithmeticOperator::Add => "+",
            ArithmeticOperator::Subtract => "-",
            ArithmeticOperator::Multiply => "*",
            ArithmeticOperator::Divide => "/",
            ArithmeticOperator::Modulo => "%",
        };
        write!(f, "{}", s)
    }
}

/// 关系操作符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationalOperator {
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    In,
    NotIn,
    Contains,
    StartsWith,
    EndsWith,
}

impl fmt::Display for RelationalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RelationalOperator::Equal => "==",
            RelationalOperator::NotEqual => "!=",
            RelationalOperator::LessThan => "<",
            RelationalOperator::LessThanOrEqual => "<=",
            RelationalOperator::GreaterThan => ">",
            RelationalOperator::GreaterThanOrEqual => ">=",
            RelationalOperator::In => "IN",
            RelationalOperator::NotIn => "NOT IN",
            RelationalOperator::Contains => "CONTAINS",
            RelationalOperator::StartsWith => "STARTS WITH",
            RelationalOperator::EndsWith => "ENDS WITH",
        };
        write!(f, "{}", s)
    }
}

/// 逻辑操作符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalOperator {
    And,
    Or,
    Xor,
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
            LogicalOperator::Xor => "XOR",
        };
        write!(f, "{}", s)
    }
}

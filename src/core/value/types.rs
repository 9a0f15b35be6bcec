//! 核心值类型定义

use serde::{Deserialize, Serialize};
use std::fmt;

use super::dataset::DataSet;

/// 空值的具体类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NullType {
    Null,
    NaN,
    BadData,
    BadType,
    OutOfRange,
    UnknownProp,
}

/// 表示执行结果中的单个值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Empty,
    Null(NullType),
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    DataSet(DataSet),
}

impl Value {
    pub fn null() -> Self {
        Value::Null(NullType::Null)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_dataset(&self) -> Option<&DataSet> {
        match self {
            Value::DataSet(ds) => Some(ds),
            _ => None,
        }
    }

    /// 获取类型名称，用于日志和错误信息
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Empty => "empty",
            Value::Null(_) => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::DataSet(_) => "dataset",
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Empty
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => write!(f, "__EMPTY__"),
            Value::Null(_) => write!(f, "NULL"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::List(items) => {
                let parts: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", parts.join(","))
            }
            Value::DataSet(ds) => write!(f, "{}", ds),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<DataSet> for Value {
    fn from(ds: DataSet) -> Self {
        Value::DataSet(ds)
    }
}

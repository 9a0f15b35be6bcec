//! 结果核心模块 - 定义Result的核心结构

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::Value;

/// 查询执行结果状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultState {
    UnExecuted,
    /// 部分分片失败，但调用方未要求完整结果
    PartialSuccess,
    Success,
    Failed,
}

impl ResultState {
    /// 是否可以继续向下游传递
    pub fn is_ok(&self) -> bool {
        matches!(self, ResultState::Success | ResultState::PartialSuccess)
    }
}

impl fmt::Display for ResultState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResultState::UnExecuted => "UnExecuted",
            ResultState::PartialSuccess => "PartialSuccess",
            ResultState::Success => "Success",
            ResultState::Failed => "Failed",
        };
        write!(f, "{}", s)
    }
}

/// 结果迭代方式
///
/// 决定下游执行器如何遍历结果值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IteratorKind {
    Default,
    Sequential,
    GetNeighbors,
    Prop,
}

/// 单个执行器产出的结果
#[derive(Debug, Clone, PartialEq)]
pub struct Result {
    pub(super) value: Value,
    pub(super) state: ResultState,
    pub(super) iter_kind: IteratorKind,
    pub(super) msg: String,
}

impl Result {
    /// 空结果，状态为成功
    pub fn empty() -> Self {
        Self {
            value: Value::Empty,
            state: ResultState::Success,
            iter_kind: IteratorKind::Default,
            msg: String::new(),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn state(&self) -> ResultState {
        self.state
    }

    pub fn iter_kind(&self) -> IteratorKind {
        self.iter_kind
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }

    /// 数据集行数，非数据集结果为 0
    pub fn row_count(&self) -> usize {
        self.value.as_dataset().map(|ds| ds.row_count()).unwrap_or(0)
    }
}

impl Default for Result {
    fn default() -> Self {
        Self::empty()
    }
}

//! 结果构建器模块 - 用于构建Result对象

use super::result_core::{IteratorKind, Result, ResultState};
use crate::core::Value;

/// 结果构建器
///
/// 链式设置值、迭代方式和状态，最后 `finish` 产出 `Result`
#[derive(Debug)]
pub struct ResultBuilder {
    value: Value,
    state: ResultState,
    iter_kind: IteratorKind,
    msg: String,
}

impl ResultBuilder {
    pub fn new() -> Self {
        Self {
            value: Value::Empty,
            state: ResultState::Success,
            iter_kind: IteratorKind::Default,
            msg: String::new(),
        }
    }

    /// 设置值
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// 设置迭代方式
    pub fn iter(mut self, kind: IteratorKind) -> Self {
        self.iter_kind = kind;
        self
    }

    /// 设置状态
    pub fn state(mut self, state: ResultState) -> Self {
        self.state = state;
        self
    }

    pub fn msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }

    pub fn finish(self) -> Result {
        Result {
            value: self.value,
            state: self.state,
            iter_kind: self.iter_kind,
            msg: self.msg,
        }
    }
}

impl Default for ResultBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DataSet;

    #[test]
    fn test_result_builder() {
        let mut ds = DataSet::with_columns(["Names"]);
        ds.add_row(vec![Value::from("idx_a")]);

        let result = ResultBuilder::new()
            .value(ds)
            .iter(IteratorKind::Default)
            .state(ResultState::PartialSuccess)
            .finish();

        assert_eq!(result.state(), ResultState::PartialSuccess);
        assert_eq!(result.iter_kind(), IteratorKind::Default);
        assert_eq!(result.row_count(), 1);
        assert!(result.state().is_ok());
    }

    #[test]
    fn test_default_builder_is_success() {
        let result = ResultBuilder::default().finish();
        assert_eq!(result.state(), ResultState::Success);
        assert!(result.value().is_empty());
    }
}

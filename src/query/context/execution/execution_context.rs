//! 执行上下文
//!
//! 变量名到执行结果的映射。同一变量可能被多次写入（例如循环体），
//! 每个变量保留完整的结果历史，读取时返回最新一次。

use std::collections::HashMap;

use crate::core::result::Result;
use crate::core::Value;

#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    results: HashMap<String, Vec<Result>>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一次结果
    pub fn set_result(&mut self, name: impl Into<String>, result: Result) {
        self.results.entry(name.into()).or_default().push(result);
    }

    /// 变量的最新结果
    pub fn get_result(&self, name: &str) -> Option<&Result> {
        self.results.get(name).and_then(|history| history.last())
    }

    /// 变量的最新值
    pub fn get_value(&self, name: &str) -> Option<&Value> {
        self.get_result(name).map(Result::value)
    }

    pub fn get_history(&self, name: &str) -> &[Result] {
        self.results.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn exists(&self, name: &str) -> bool {
        self.results.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<Result>> {
        self.results.remove(name)
    }

    pub fn variable_count(&self) -> usize {
        self.results.len()
    }
}

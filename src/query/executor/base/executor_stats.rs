//! 执行器统计信息
//!
//! 记录执行器产出的行数与耗时，PROFILE 时写入计划描述

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutorStats {
    /// 产出的行数
    pub num_rows: usize,
    /// 执行时间（微秒），只含 `execute` 本身
    pub exec_time_us: u64,
    /// 总时间（微秒），含调度开销
    pub total_time_us: u64,
}

impl ExecutorStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, count: usize) {
        self.num_rows += count;
    }

    pub fn add_exec_time(&mut self, duration: Duration) {
        self.exec_time_us += duration.as_micros() as u64;
    }

    pub fn add_total_time(&mut self, duration: Duration) {
        self.total_time_us += duration.as_micros() as u64;
    }

    pub fn to_formatted_string(&self) -> String {
        format!(
            "rows: {}, exec_time: {}us, total_time: {}us",
            self.num_rows, self.exec_time_us, self.total_time_us
        )
    }
}

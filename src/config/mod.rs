use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{DBError, DBResult};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub query: QueryConfig,
}

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "graphdb-exec".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
        }
    }
}

/// 查询执行配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct QueryConfig {
    /// 部分分片失败时是否仍返回已取得的数据
    pub accept_partial_success: bool,
    /// 单个查询计划中允许的最大节点数
    pub max_plan_nodes: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            accept_partial_success: false,
            max_plan_nodes: 10_000,
        }
    }
}

impl QueryConfig {
    /// 存储查询是否要求所有分片都成功
    pub fn is_complete_require(&self) -> bool {
        !self.accept_partial_success
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> DBResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| DBError::Config(format!("读取 {} 失败: {}", path.display(), e)))?;
        toml::from_str(&content).map_err(|e| DBError::Config(e.to_string()))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> DBResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| DBError::Config(e.to_string()))?;
        fs::write(path.as_ref(), content)
            .map_err(|e| DBError::Config(format!("写入 {} 失败: {}", path.as_ref().display(), e)))
    }
}

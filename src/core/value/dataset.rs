//! 数据集类型
//!
//! 执行器输出的表格化结果：列名加若干行

use serde::{Deserialize, Serialize};
use std::fmt;

use super::types::Value;

/// 一行数据
pub type Row = Vec<Value>;

/// 简单数据集表示
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSet {
    pub col_names: Vec<String>,
    pub rows: Vec<Row>,
}

impl DataSet {
    pub fn new() -> Self {
        Self {
            col_names: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// 创建带列名的数据集
    pub fn with_columns<I, S>(col_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            col_names: col_names.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// 添加行
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.col_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 获取指定列的索引
    pub fn get_col_index(&self, col_name: &str) -> Option<usize> {
        self.col_names.iter().position(|name| name == col_name)
    }

    /// 获取指定列的所有值
    pub fn get_column(&self, col_name: &str) -> Option<Vec<Value>> {
        let index = self.get_col_index(col_name)?;
        Some(self.rows.iter().filter_map(|row| row.get(index).cloned()).collect())
    }
}

impl fmt::Display for DataSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.col_names.join("|"))?;
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_column() {
        let mut ds = DataSet::with_columns(["Field", "Type"]);
        ds.add_row(vec![Value::from("name"), Value::from("string")]);
        ds.add_row(vec![Value::from("age"), Value::from("int64")]);

        assert_eq!(ds.row_count(), 2);
        assert_eq!(
            ds.get_column("Field"),
            Some(vec![Value::from("name"), Value::from("age")])
        );
        assert_eq!(ds.get_column("Missing"), None);
    }
}

//! 索引格式化
//!
//! 把索引描述转换成 DESC INDEX 与 SHOW CREATE INDEX 的结果集

use crate::core::{DataSet, Value};
use crate::storage::metadata::IndexItem;

/// DESC TAG INDEX / DESC EDGE INDEX 的结果集，每个索引字段一行
pub fn to_desc_index(index: &IndexItem) -> DataSet {
    let mut ds = DataSet::with_columns(["Field", "Type"]);
    for field in &index.fields {
        ds.add_row(vec![
            Value::from(field.name.as_str()),
            Value::from(field.data_type.to_string()),
        ]);
    }
    ds
}

/// SHOW CREATE TAG INDEX / SHOW CREATE EDGE INDEX 的结果集
pub fn to_show_create_index(is_tag_index: bool, index_name: &str, index: &IndexItem) -> DataSet {
    let (name_col, create_col, keyword) = if is_tag_index {
        ("Tag Index Name", "Create Tag Index", "TAG")
    } else {
        ("Edge Index Name", "Create Edge Index", "EDGE")
    };
    let mut ds = DataSet::with_columns([name_col, create_col]);

    let fields: Vec<String> = index
        .fields
        .iter()
        .map(|f| format!(" `{}`", f.name))
        .collect();
    let mut stmt = format!(
        "CREATE {} INDEX `{}` ON `{}` (\n",
        keyword, index_name, index.schema_name
    );
    if !fields.is_empty() {
        stmt.push_str(&fields.join(",\n"));
        stmt.push('\n');
    }
    stmt.push(')');

    ds.add_row(vec![Value::from(index_name), Value::from(stmt)]);
    ds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DataType;
    use crate::storage::metadata::ColumnDef;

    fn index() -> IndexItem {
        IndexItem {
            index_id: 10,
            index_name: "like_idx".to_string(),
            schema_name: "like".to_string(),
            fields: vec![
                ColumnDef::new("likeness", DataType::Double),
                ColumnDef::new("since", DataType::Timestamp),
            ],
        }
    }

    #[test]
    fn test_desc_index() {
        let ds = to_desc_index(&index());
        assert_eq!(ds.col_names, vec!["Field", "Type"]);
        assert_eq!(
            ds.rows,
            vec![
                vec![Value::from("likeness"), Value::from("double")],
                vec![Value::from("since"), Value::from("timestamp")],
            ]
        );
    }

    #[test]
    fn test_show_create_edge_index() {
        let ds = to_show_create_index(false, "like_idx", &index());
        assert_eq!(ds.col_names, vec!["Edge Index Name", "Create Edge Index"]);
        assert_eq!(
            ds.rows[0],
            vec![
                Value::from("like_idx"),
                Value::from("CREATE EDGE INDEX `like_idx` ON `like` (\n `likeness`,\n `since`\n)"),
            ]
        );
    }
}

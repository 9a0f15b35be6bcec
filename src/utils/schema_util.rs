//! Schema 格式化
//!
//! 把 schema 描述转换成 DESC 与 SHOW CREATE 的结果集

use crate::core::{DataSet, Value};
use crate::storage::metadata::Schema;

/// DESC TAG / DESC EDGE 的结果集，每列一行
pub fn to_desc_schema(schema: &Schema) -> DataSet {
    let mut ds = DataSet::with_columns(["Field", "Type", "Null", "Default"]);
    for col in &schema.columns {
        ds.add_row(vec![
            Value::from(col.name.as_str()),
            Value::from(col.data_type.to_string()),
            Value::from(if col.nullable { "YES" } else { "NO" }),
            col.default.clone().unwrap_or(Value::Empty),
        ]);
    }
    ds
}

/// SHOW CREATE TAG / SHOW CREATE EDGE 的结果集
pub fn to_show_create_schema(is_tag: bool, name: &str, schema: &Schema) -> DataSet {
    let (kind_col, create_col, keyword) = if is_tag {
        ("Tag", "Create Tag", "TAG")
    } else {
        ("Edge", "Create Edge", "EDGE")
    };
    let mut ds = DataSet::with_columns([kind_col, create_col]);

    let cols: Vec<String> = schema
        .columns
        .iter()
        .map(|col| {
            let mut line = format!(" `{}` {}", col.name, col.data_type);
            line.push_str(if col.nullable { " NULL" } else { " NOT NULL" });
            if let Some(default) = &col.default {
                line.push_str(&format!(" DEFAULT {}", default));
            }
            line
        })
        .collect();

    let mut stmt = format!("CREATE {} `{}` (\n", keyword, name);
    if !cols.is_empty() {
        stmt.push_str(&cols.join(",\n"));
        stmt.push('\n');
    }
    stmt.push(')');
    let prop = &schema.schema_prop;
    stmt.push_str(&format!(
        " ttl_duration = {}, ttl_col = \"{}\"",
        prop.ttl_duration.unwrap_or(0),
        prop.ttl_col.as_deref().unwrap_or("")
    ));

    ds.add_row(vec![Value::from(name), Value::from(stmt)]);
    ds
}

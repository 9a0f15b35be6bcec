//! 元数据类型定义
//!
//! Schema、索引描述以及修改 schema 的操作项

use serde::{Deserialize, Serialize};

use crate::core::{DataType, Value};

pub type GraphSpaceId = i32;
pub type TagId = i32;
pub type EdgeType = i32;
pub type IndexId = i32;

/// Schema 列定义
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
    pub default: Option<Value>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: true,
            default: None,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// TTL 等 schema 级属性
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaProp {
    pub ttl_duration: Option<i64>,
    pub ttl_col: Option<String>,
}

impl SchemaProp {
    pub fn is_empty(&self) -> bool {
        self.ttl_duration.is_none() && self.ttl_col.is_none()
    }
}

/// Tag 或 Edge 的 schema
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub columns: Vec<ColumnDef>,
    pub schema_prop: SchemaProp,
}

impl Schema {
    pub fn new(columns: Vec<ColumnDef>) -> Self {
        Self {
            columns,
            schema_prop: SchemaProp::default(),
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlterSchemaOp {
    Add,
    Change,
    Drop,
}

/// 一条 ALTER 操作，`schema` 中只有受影响的列
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlterSchemaItem {
    pub op: AlterSchemaOp,
    pub schema: Schema,
}

impl AlterSchemaItem {
    pub fn new(op: AlterSchemaOp, columns: Vec<ColumnDef>) -> Self {
        Self {
            op,
            schema: Schema::new(columns),
        }
    }
}

/// 索引描述
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexItem {
    pub index_id: IndexId,
    pub index_name: String,
    /// 被索引的 tag 或 edge 名
    pub schema_name: String,
    pub fields: Vec<ColumnDef>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TagItem {
    pub tag_id: TagId,
    pub tag_name: String,
    pub version: i64,
    pub schema: Schema,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeItem {
    pub edge_type: EdgeType,
    pub edge_name: String,
    pub version: i64,
    pub schema: Schema,
}

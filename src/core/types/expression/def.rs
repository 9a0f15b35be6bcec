//! 表达式类型定义

use serde::{Deserialize, Serialize};

use crate::core::types::operators::{
    ArithmeticOperator, LogicalOperator, RelationalOperator, UnaryOperator,
};
use crate::core::types::DataType;
use crate::core::Value;

/// 统一表达式类型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// 常量
    Constant(Value),

    /// 一元运算
    Unary {
        op: UnaryOperator,
        operand: Box<Expression>,
    },

    /// 类型转换
    TypeCast {
        target_type: DataType,
        operand: Box<Expression>,
    },

    /// 裸标签，如 `age`
    Label(String),

    /// 标签属性，如 `e.age`，左右两侧均为标签名
    LabelAttribute { left: String, right: String },

    /// 算术运算
    Arithmetic {
        op: ArithmeticOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// 关系运算
    Relational {
        op: RelationalOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// 逻辑运算
    Logical {
        op: LogicalOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// 下标访问，如 `list[0]`
    Subscript {
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// 属性访问，如 `v.name`（运行期求值）
    Attribute {
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// 函数调用，参数保持顺序
    FunctionCall { name: String, args: Vec<Expression> },

    /// `uuid("field")`
    Uuid(String),

    /// 变量引用 `$var`
    Variable(String),

    /// 带版本的变量引用 `$var{version}`
    VersionedVariable {
        var: String,
        version: Option<Box<Expression>>,
    },

    /// 列表字面量
    List(Vec<Expression>),

    /// 集合字面量
    Set(Vec<Expression>),

    /// 映射字面量，键值对保持顺序
    Map(Vec<(String, Expression)>),

    /// `tag.prop`
    TagProperty { tag: String, prop: String },

    /// `edge.prop`
    EdgeProperty { edge: String, prop: String },

    /// `$-.prop`
    InputProperty(String),

    /// `$var.prop`
    VariableProperty { var: String, prop: String },

    /// `$$.tag.prop`
    DestProperty { tag: String, prop: String },

    /// `$^.tag.prop`
    SourceProperty { tag: String, prop: String },

    /// `edge._src`
    EdgeSrcId(String),

    /// `edge._type`
    EdgeType(String),

    /// `edge._rank`
    EdgeRank(String),

    /// `edge._dst`
    EdgeDst(String),

    /// 当前顶点
    Vertex,

    /// 当前边
    Edge,
}

impl Expression {
    /// 表达式种类名称，用于日志和计划描述
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::Constant(_) => "Constant",
            Expression::Unary { .. } => "Unary",
            Expression::TypeCast { .. } => "TypeCast",
            Expression::Label(_) => "Label",
            Expression::LabelAttribute { .. } => "LabelAttribute",
            Expression::Arithmetic { .. } => "Arithmetic",
            Expression::Relational { .. } => "Relational",
            Expression::Logical { .. } => "Logical",
            Expression::Subscript { .. } => "Subscript",
            Expression::Attribute { .. } => "Attribute",
            Expression::FunctionCall { .. } => "FunctionCall",
            Expression::Uuid(_) => "UUID",
            Expression::Variable(_) => "Variable",
            Expression::VersionedVariable { .. } => "VersionedVariable",
            Expression::List(_) => "List",
            Expression::Set(_) => "Set",
            Expression::Map(_) => "Map",
            Expression::TagProperty { .. } => "TagProperty",
            Expression::EdgeProperty { .. } => "EdgeProperty",
            Expression::InputProperty(_) => "InputProperty",
            Expression::VariableProperty { .. } => "VariableProperty",
            Expression::DestProperty { .. } => "DestProperty",
            Expression::SourceProperty { .. } => "SourceProperty",
            Expression::EdgeSrcId(_) => "EdgeSrcId",
            Expression::EdgeType(_) => "EdgeType",
            Expression::EdgeRank(_) => "EdgeRank",
            Expression::EdgeDst(_) => "EdgeDst",
            Expression::Vertex => "Vertex",
            Expression::Edge => "Edge",
        }
    }

    /// 是否为常量
    pub fn is_constant(&self) -> bool {
        matches!(self, Expression::Constant(_))
    }
}

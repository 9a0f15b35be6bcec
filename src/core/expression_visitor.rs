//! 表达式访问者模式
//!
//! 双分派：`Expression::accept` 根据变体调用访问者上对应的 `visit_*` 方法。
//! 访问者拿到的是各变体字段的可变引用，因此可以就地改写子树。

use crate::core::types::expression::Expression;
use crate::core::types::operators::{
    ArithmeticOperator, LogicalOperator, RelationalOperator, UnaryOperator,
};
use crate::core::types::DataType;
use crate::core::Value;

/// 可变表达式访问者 trait
///
/// 每个表达式种类对应一个方法，访问结果通过 `Result` 关联类型返回，
/// 而不是保存在访问者自身的状态里。
pub trait ExpressionVisitor {
    /// 访问者结果类型
    type Result;

    fn visit_constant(&mut self, value: &mut Value) -> Self::Result;

    fn visit_unary(&mut self, op: UnaryOperator, operand: &mut Expression) -> Self::Result;

    fn visit_type_cast(
        &mut self,
        target_type: &DataType,
        operand: &mut Expression,
    ) -> Self::Result;

    fn visit_label(&mut self, name: &str) -> Self::Result;

    fn visit_label_attribute(&mut self, left: &str, right: &str) -> Self::Result;

    fn visit_arithmetic(
        &mut self,
        op: ArithmeticOperator,
        left: &mut Expression,
        right: &mut Expression,
    ) -> Self::Result;

    fn visit_relational(
        &mut self,
        op: RelationalOperator,
        left: &mut Expression,
        right: &mut Expression,
    ) -> Self::Result;

    fn visit_logical(
        &mut self,
        op: LogicalOperator,
        left: &mut Expression,
        right: &mut Expression,
    ) -> Self::Result;

    fn visit_subscript(&mut self, left: &mut Expression, right: &mut Expression) -> Self::Result;

    fn visit_attribute(&mut self, left: &mut Expression, right: &mut Expression) -> Self::Result;

    fn visit_function_call(&mut self, name: &str, args: &mut [Expression]) -> Self::Result;

    fn visit_uuid(&mut self, field: &str) -> Self::Result;

    fn visit_variable(&mut self, var: &str) -> Self::Result;

    fn visit_versioned_variable(
        &mut self,
        var: &str,
        version: Option<&mut Expression>,
    ) -> Self::Result;

    fn visit_list(&mut self, items: &mut [Expression]) -> Self::Result;

    fn visit_set(&mut self, items: &mut [Expression]) -> Self::Result;

    fn visit_map(&mut self, items: &mut [(String, Expression)]) -> Self::Result;

    fn visit_tag_property(&mut self, tag: &str, prop: &str) -> Self::Result;

    fn visit_edge_property(&mut self, edge: &str, prop: &str) -> Self::Result;

    fn visit_input_property(&mut self, prop: &str) -> Self::Result;

    fn visit_variable_property(&mut self, var: &str, prop: &str) -> Self::Result;

    fn visit_dest_property(&mut self, tag: &str, prop: &str) -> Self::Result;

    fn visit_source_property(&mut self, tag: &str, prop: &str) -> Self::Result;

    fn visit_edge_src_id(&mut self, edge: &str) -> Self::Result;

    fn visit_edge_type(&mut self, edge: &str) -> Self::Result;

    fn visit_edge_rank(&mut self, edge: &str) -> Self::Result;

    fn visit_edge_dst(&mut self, edge: &str) -> Self::Result;

    fn visit_vertex(&mut self) -> Self::Result;

    fn visit_edge(&mut self) -> Self::Result;
}

impl Expression {
    /// 接受访问者，按变体分派
    pub fn accept<V: ExpressionVisitor + ?Sized>(&mut self, visitor: &mut V) -> V::Result {
        match self {
            Expression::Constant(value) => visitor.visit_constant(value),
            Expression::Unary { op, operand } => visitor.visit_unary(*op, operand),
            Expression::TypeCast {
                target_type,
                operand,
            } => visitor.visit_type_cast(target_type, operand),
            Expression::Label(name) => visitor.visit_label(name),
            Expression::LabelAttribute { left, right } => {
                visitor.visit_label_attribute(left, right)
            }
            Expression::Arithmetic { op, left, right } => {
                visitor.visit_arithmetic(*op, left, right)
            }
            Expression::Relational { op, left, right } => {
                visitor.visit_relational(*op, left, right)
            }
            Expression::Logical { op, left, right } => visitor.visit_logical(*op, left, right),
            Expression::Subscript { left, right } => visitor.visit_subscript(left, right),
            Expression::Attribute { left, right } => visitor.visit_attribute(left, right),
            Expression::FunctionCall { name, args } => visitor.visit_function_call(name, args),
            Expression::Uuid(field) => visitor.visit_uuid(field),
            Expression::Variable(var) => visitor.visit_variable(var),
            Expression::VersionedVariable { var, version } => {
                visitor.visit_versioned_variable(var, version.as_deref_mut())
            }
            Expression::List(items) => visitor.visit_list(items),
            Expression::Set(items) => visitor.visit_set(items),
            Expression::Map(items) => visitor.visit_map(items),
            Expression::TagProperty { tag, prop } => visitor.visit_tag_property(tag, prop),
            Expression::EdgeProperty { edge, prop } => visitor.visit_edge_property(edge, prop),
            Expression::InputProperty(prop) => visitor.visit_input_property(prop),
            Expression::VariableProperty { var, prop } => {
                visitor.visit_variable_property(var, prop)
            }
            Expression::DestProperty { tag, prop } => visitor.visit_dest_property(tag, prop),
            Expression::SourceProperty { tag, prop } => visitor.visit_source_property(tag, prop),
            Expression::EdgeSrcId(edge) => visitor.visit_edge_src_id(edge),
            Expression::EdgeType(edge) => visitor.visit_edge_type(edge),
            Expression::EdgeRank(edge) => visitor.visit_edge_rank(edge),
            Expression::EdgeDst(edge) => visitor.visit_edge_dst(edge),
            Expression::Vertex => visitor.visit_vertex(),
            Expression::Edge => visitor.visit_edge(),
        }
    }
}

//! 表达式的文本形式
//!
//! 用于计划描述（EXPLAIN）和日志输出

use std::fmt;

use super::def::Expression;

fn join(items: &[Expression]) -> String {
    items
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Constant(v) => write!(f, "{}", v),
            Expression::Unary { op, operand } => {
                if op.is_postfix() {
                    write!(f, "{} {}", operand, op)
                } else {
                    write!(f, "{}({})", op, operand)
                }
            }
            Expression::TypeCast {
                target_type,
                operand,
            } => write!(f, "({}){}", target_type, operand),
            Expression::Label(name) => write!(f, "{}", name),
            Expression::LabelAttribute { left, right } => write!(f, "{}.{}", left, right),
            Expression::Arithmetic { op, left, right } => write!(f, "({}{}{})", left, op, right),
            Expression::Relational { op, left, right } => {
                write!(f, "({} {} {})", left, op, right)
            }
            Expression::Logical { op, left, right } => write!(f, "({} {} {})", left, op, right),
            Expression::Subscript { left, right } => write!(f, "{}[{}]", left, right),
            Expression::Attribute { left, right } => write!(f, "{}.{}", left, right),
            Expression::FunctionCall { name, args } => write!(f, "{}({})", name, join(args)),
            Expression::Uuid(field) => write!(f, "uuid(\"{}\")", field),
            Expression::Variable(var) => write!(f, "${}", var),
            Expression::VersionedVariable { var, version } => match version {
                Some(v) => write!(f, "${}{{{}}}", var, v),
                None => write!(f, "${}", var),
            },
            Expression::List(items) => write!(f, "[{}]", join(items)),
            Expression::Set(items) => write!(f, "{{{}}}", join(items)),
            Expression::Map(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .map(|(k, v)| format!("{}:{}", k, v))
                    .collect();
                write!(f, "{{{}}}", parts.join(","))
            }
            Expression::TagProperty { tag, prop } => write!(f, "{}.{}", tag, prop),
            Expression::EdgeProperty { edge, prop } => write!(f, "{}.{}", edge, prop),
            Expression::InputProperty(prop) => write!(f, "$-.{}", prop),
            Expression::VariableProperty { var, prop } => write!(f, "${}.{}", var, prop),
            Expression::DestProperty { tag, prop } => write!(f, "$$.{}.{}", tag, prop),
            Expression::SourceProperty { tag, prop } => write!(f, "$^.{}.{}", tag, prop),
            Expression::EdgeSrcId(edge) => write!(f, "{}._src", edge),
            Expression::EdgeType(edge) => write!(f, "{}._type", edge),
            Expression::EdgeRank(edge) => write!(f, "{}._rank", edge),
            Expression::EdgeDst(edge) => write!(f, "{}._dst", edge),
            Expression::Vertex => write!(f, "VERTEX"),
            Expression::Edge => write!(f, "EDGE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::operators::UnaryOperator;

    #[test]
    fn test_property_display() {
        assert_eq!(Expression::source_property("v", "age").to_string(), "$^.v.age");
        assert_eq!(Expression::dest_property("v", "age").to_string(), "$$.v.age");
        assert_eq!(Expression::edge_property("e", "w").to_string(), "e.w");
        assert_eq!(Expression::input_property("id").to_string(), "$-.id");
        assert_eq!(Expression::EdgeRank("e".into()).to_string(), "e._rank");
    }

    #[test]
    fn test_composite_display() {
        let expr = Expression::gt(
            Expression::add(Expression::label("a"), Expression::constant(1i64)),
            Expression::constant(10i64),
        );
        assert_eq!(expr.to_string(), "((a+1) > 10)");

        let not_null = Expression::unary(UnaryOperator::IsNull, Expression::label("b"));
        assert_eq!(not_null.to_string(), "b IS NULL");

        let map = Expression::Map(vec![("k".to_string(), Expression::constant("v"))]);
        assert_eq!(map.to_string(), "{k:\"v\"}");
    }
}

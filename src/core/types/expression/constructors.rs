//! 表达式构造函数
//!
//! 提供创建各类表达式的工厂方法。

use crate::core::types::expression::Expression;
use crate::core::types::operators::{
    ArithmeticOperator, LogicalOperator, RelationalOperator, UnaryOperator,
};
use crate::core::types::DataType;
use crate::core::Value;

impl Expression {
    /// 创建常量表达式
    pub fn constant(value: impl Into<Value>) -> Self {
        Expression::Constant(value.into())
    }

    pub fn label(name: impl Into<String>) -> Self {
        Expression::Label(name.into())
    }

    pub fn label_attribute(left: impl Into<String>, right: impl Into<String>) -> Self {
        Expression::LabelAttribute {
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn unary(op: UnaryOperator, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn type_cast(target_type: DataType, operand: Expression) -> Self {
        Expression::TypeCast {
            target_type,
            operand: Box::new(operand),
        }
    }

    pub fn arithmetic(op: ArithmeticOperator, left: Expression, right: Expression) -> Self {
        Expression::Arithmetic {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn add(left: Expression, right: Expression) -> Self {
        Self::arithmetic(ArithmeticOperator::Add, left, right)
    }

    pub fn relational(op: RelationalOperator, left: Expression, right: Expression) -> Self {
        Expression::Relational {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn equal(left: Expression, right: Expression) -> Self {
        Self::relational(RelationalOperator::Equal, left, right)
    }

    pub fn gt(left: Expression, right: Expression) -> Self {
        Self::relational(RelationalOperator::GreaterThan, left, right)
    }

    pub fn logical(op: LogicalOperator, left: Expression, right: Expression) -> Self {
        Expression::Logical {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Self::logical(LogicalOperator::And, left, right)
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Self::logical(LogicalOperator::Or, left, right)
    }

    pub fn subscript(left: Expression, right: Expression) -> Self {
        Expression::Subscript {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn attribute(left: Expression, right: Expression) -> Self {
        Expression::Attribute {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn function_call(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::FunctionCall {
            name: name.into(),
            args,
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable(name.into())
    }

    pub fn tag_property(tag: impl Into<String>, prop: impl Into<String>) -> Self {
        Expression::TagProperty {
            tag: tag.into(),
            prop: prop.into(),
        }
    }

    pub fn edge_property(edge: impl Into<String>, prop: impl Into<String>) -> Self {
        Expression::EdgeProperty {
            edge: edge.into(),
            prop: prop.into(),
        }
    }

    pub fn source_property(tag: impl Into<String>, prop: impl Into<String>) -> Self {
        Expression::SourceProperty {
            tag: tag.into(),
            prop: prop.into(),
        }
    }

    pub fn dest_property(tag: impl Into<String>, prop: impl Into<String>) -> Self {
        Expression::DestProperty {
            tag: tag.into(),
            prop: prop.into(),
        }
    }

    pub fn input_property(prop: impl Into<String>) -> Self {
        Expression::InputProperty(prop.into())
    }

    pub fn variable_property(var: impl Into<String>, prop: impl Into<String>) -> Self {
        Expression::VariableProperty {
            var: var.into(),
            prop: prop.into(),
        }
    }
}

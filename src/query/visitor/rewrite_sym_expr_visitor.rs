//! 符号表达式下推改写
//!
//! 把裸标签 `name` 改写成限定作用域的属性引用：
//! 边上下文改写为 `sym.name`（`EdgeProperty`），
//! 点上下文改写为 `$^.sym.name`（`SourceProperty`）。
//! 无法在当前上下文下推的表达式会置上类型错误标记。
//!
//! 每次访问返回 `RewriteOutcome`：需要替换当前节点时携带新子树，
//! 同时携带对错误标记的更新。父节点把替换子树接到对应位置，
//! 旧子树随之释放；错误标记按访问顺序以最后一次更新为准。

use crate::core::expression_visitor::ExpressionVisitor;
use crate::core::types::operators::{
    ArithmeticOperator, LogicalOperator, RelationalOperator, UnaryOperator,
};
use crate::core::types::DataType;
use crate::core::{Expression, Value};

/// 对错误标记的更新
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultUpdate {
    Keep,
    Raise,
    Clear,
}

impl FaultUpdate {
    /// 按先后顺序合并两次更新
    pub fn then(self, later: FaultUpdate) -> FaultUpdate {
        match later {
            FaultUpdate::Keep => self,
            other => other,
        }
    }
}

/// 一次访问的结果
#[derive(Debug, Clone, PartialEq)]
pub struct RewriteOutcome {
    pub replacement: Option<Expression>,
    pub fault: FaultUpdate,
}

impl RewriteOutcome {
    fn unchanged() -> Self {
        Self {
            replacement: None,
            fault: FaultUpdate::Keep,
        }
    }

    fn replace(expr: Expression) -> Self {
        Self {
            replacement: Some(expr),
            fault: FaultUpdate::Keep,
        }
    }

    fn wrong_type() -> Self {
        Self {
            replacement: None,
            fault: FaultUpdate::Raise,
        }
    }

    fn children(fault: FaultUpdate) -> Self {
        Self {
            replacement: None,
            fault,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RewriteSymExprVisitor {
    sym: String,
    is_edge: bool,
}

impl RewriteSymExprVisitor {
    pub fn new(sym: impl Into<String>, is_edge: bool) -> Self {
        Self {
            sym: sym.into(),
            is_edge,
        }
    }

    /// 就地改写整棵表达式
    ///
    /// 返回 `false` 表示遇到了无法下推的子表达式，此时调用方必须放弃下推，
    /// 不得使用部分改写的结果
    pub fn rewrite(&mut self, expr: &mut Expression) -> bool {
        let outcome = expr.accept(self);
        if let Some(replacement) = outcome.replacement {
            *expr = replacement;
        }
        outcome.fault != FaultUpdate::Raise
    }

    /// 访问子节点，有替换时接到原位置
    fn visit_child(&mut self, child: &mut Expression) -> FaultUpdate {
        let outcome = child.accept(self);
        if let Some(replacement) = outcome.replacement {
            *child = replacement;
        }
        outcome.fault
    }

    fn visit_children<'a, I>(&mut self, children: I) -> RewriteOutcome
    where
        I: IntoIterator<Item = &'a mut Expression>,
    {
        let fault = children
            .into_iter()
            .fold(FaultUpdate::Keep, |acc, child| acc.then(self.visit_child(child)));
        RewriteOutcome::children(fault)
    }
}

/// 改写表达式以便下推到存储层
///
/// 返回 `None` 表示表达式无法安全下推
pub fn rewrite_sym_expr(mut expr: Expression, sym: &str, is_edge: bool) -> Option<Expression> {
    let mut visitor = RewriteSymExprVisitor::new(sym, is_edge);
    if visitor.rewrite(&mut expr) {
        Some(expr)
    } else {
        None
    }
}

impl ExpressionVisitor for RewriteSymExprVisitor {
    type Result = RewriteOutcome;

    fn visit_constant(&mut self, _value: &mut Value) -> RewriteOutcome {
        RewriteOutcome::unchanged()
    }

    fn visit_unary(&mut self, _op: UnaryOperator, operand: &mut Expression) -> RewriteOutcome {
        self.visit_children([operand])
    }

    fn visit_type_cast(
        &mut self,
        _target_type: &DataType,
        operand: &mut Expression,
    ) -> RewriteOutcome {
        self.visit_children([operand])
    }

    fn visit_label(&mut self, name: &str) -> RewriteOutcome {
        if self.is_edge {
            RewriteOutcome::replace(Expression::edge_property(self.sym.as_str(), name))
        } else {
            RewriteOutcome::replace(Expression::source_property(self.sym.as_str(), name))
        }
    }

    fn visit_label_attribute(&mut self, left: &str, right: &str) -> RewriteOutcome {
        if self.is_edge {
            RewriteOutcome {
                replacement: Some(Expression::edge_property(left, right)),
                fault: FaultUpdate::Clear,
            }
        } else {
            RewriteOutcome::wrong_type()
        }
    }

    fn visit_arithmetic(
        &mut self,
        _op: ArithmeticOperator,
        left: &mut Expression,
        right: &mut Expression,
    ) -> RewriteOutcome {
        self.visit_children([left, right])
    }

    fn visit_relational(
        &mut self,
        _op: RelationalOperator,
        left: &mut Expression,
        right: &mut Expression,
    ) -> RewriteOutcome {
        self.visit_children([left, right])
    }

    fn visit_logical(
        &mut self,
        _op: LogicalOperator,
        left: &mut Expression,
        right: &mut Expression,
    ) -> RewriteOutcome {
        self.visit_children([left, right])
    }

    fn visit_subscript(&mut self, _left: &mut Expression, _right: &mut Expression) -> RewriteOutcome {
        RewriteOutcome::wrong_type()
    }

    fn visit_attribute(&mut self, _left: &mut Expression, _right: &mut Expression) -> RewriteOutcome {
        RewriteOutcome::wrong_type()
    }

    fn visit_function_call(&mut self, _name: &str, args: &mut [Expression]) -> RewriteOutcome {
        self.visit_children(args.iter_mut())
    }

    fn visit_uuid(&mut self, _field: &str) -> RewriteOutcome {
        RewriteOutcome::wrong_type()
    }

    fn visit_variable(&mut self, _var: &str) -> RewriteOutcome {
        RewriteOutcome::wrong_type()
    }

    fn visit_versioned_variable(
        &mut self,
        _var: &str,
        _version: Option<&mut Expression>,
    ) -> RewriteOutcome {
        RewriteOutcome::wrong_type()
    }

    fn visit_list(&mut self, items: &mut [Expression]) -> RewriteOutcome {
        self.visit_children(items.iter_mut())
    }

    fn visit_set(&mut self, items: &mut [Expression]) -> RewriteOutcome {
        self.visit_children(items.iter_mut())
    }

    fn visit_map(&mut self, items: &mut [(String, Expression)]) -> RewriteOutcome {
        self.visit_children(items.iter_mut().map(|(_, value)| value))
    }

    fn visit_tag_property(&mut self, _tag: &str, _prop: &str) -> RewriteOutcome {
        RewriteOutcome::wrong_type()
    }

    fn visit_edge_property(&mut self, _edge: &str, _prop: &str) -> RewriteOutcome {
        if self.is_edge {
            RewriteOutcome::unchanged()
        } else {
            RewriteOutcome::wrong_type()
        }
    }

    fn visit_input_property(&mut self, _prop: &str) -> RewriteOutcome {
        RewriteOutcome::wrong_type()
    }

    fn visit_variable_property(&mut self, _var: &str, _prop: &str) -> RewriteOutcome {
        RewriteOutcome::wrong_type()
    }

    fn visit_dest_property(&mut self, _tag: &str, _prop: &str) -> RewriteOutcome {
        RewriteOutcome::wrong_type()
    }

    fn visit_source_property(&mut self, _tag: &str, _prop: &str) -> RewriteOutcome {
        if self.is_edge {
            RewriteOutcome::wrong_type()
        } else {
            RewriteOutcome::unchanged()
        }
    }

    fn visit_edge_src_id(&mut self, _edge: &str) -> RewriteOutcome {
        RewriteOutcome::wrong_type()
    }

    fn visit_edge_type(&mut self, _edge: &str) -> RewriteOutcome {
        RewriteOutcome::wrong_type()
    }

    fn visit_edge_rank(&mut self, _edge: &str) -> RewriteOutcome {
        RewriteOutcome::wrong_type()
    }

    fn visit_edge_dst(&mut self, _edge: &str) -> RewriteOutcome {
        RewriteOutcome::wrong_type()
    }

    fn visit_vertex(&mut self) -> RewriteOutcome {
        RewriteOutcome::unchanged()
    }

    fn visit_edge(&mut self) -> RewriteOutcome {
        RewriteOutcome::unchanged()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_to_source_property() {
        let out = rewrite_sym_expr(Expression::label("age"), "v", false);
        assert_eq!(out, Some(Expression::source_property("v", "age")));
    }

    #[test]
    fn test_label_to_edge_property() {
        let out = rewrite_sym_expr(Expression::label("age"), "e", true);
        assert_eq!(out, Some(Expression::edge_property("e", "age")));
    }

    #[test]
    fn test_label_attribute_in_edge_context() {
        let out = rewrite_sym_expr(Expression::label_attribute("e", "age"), "like", true);
        assert_eq!(out, Some(Expression::edge_property("e", "age")));
    }

    #[test]
    fn test_label_attribute_in_vertex_context() {
        let mut expr = Expression::label_attribute("e", "age");
        let mut visitor = RewriteSymExprVisitor::new("v", false);
        assert!(!visitor.rewrite(&mut expr));
        assert_eq!(expr, Expression::label_attribute("e", "age"));
    }

    #[test]
    fn test_label_attribute_clears_earlier_fault() {
        // 左侧的 $var 置上错误标记，右侧的 e.age 在边上下文中清除它
        let expr = Expression::equal(
            Expression::variable("var"),
            Expression::label_attribute("e", "age"),
        );
        let out = rewrite_sym_expr(expr, "e", true);
        assert_eq!(
            out,
            Some(Expression::equal(
                Expression::variable("var"),
                Expression::edge_property("e", "age"),
            ))
        );
    }

    #[test]
    fn test_fault_after_label_attribute_sticks() {
        let expr = Expression::equal(
            Expression::label_attribute("e", "age"),
            Expression::variable("var"),
        );
        assert_eq!(rewrite_sym_expr(expr, "e", true), None);
    }

    #[test]
    fn test_arithmetic_splices_left() {
        let expr = Expression::add(Expression::label("a"), Expression::constant(1i64));
        let out = rewrite_sym_expr(expr, "v", false);
        assert_eq!(
            out,
            Some(Expression::add(
                Expression::source_property("v", "a"),
                Expression::constant(1i64)
            ))
        );
    }

    #[test]
    fn test_nested_logical_and_unary() {
        let expr = Expression::and(
            Expression::gt(Expression::label("age"), Expression::constant(18i64)),
            Expression::unary(UnaryOperator::Not, Expression::label("banned")),
        );
        let out = rewrite_sym_expr(expr, "e", true).expect("rewritable");
        assert_eq!(out.to_string(), "((e.age > 18) AND !(e.banned))");
    }

    #[test]
    fn test_function_call_and_containers() {
        let expr = Expression::function_call(
            "abs",
            vec![Expression::label("x"), Expression::constant(2i64)],
        );
        assert_eq!(
            rewrite_sym_expr(expr, "v", false),
            Some(Expression::function_call(
                "abs",
                vec![
                    Expression::source_property("v", "x"),
                    Expression::constant(2i64)
                ],
            ))
        );

        let list = Expression::List(vec![Expression::label("a"), Expression::label("b")]);
        assert_eq!(
            rewrite_sym_expr(list, "e", true),
            Some(Expression::List(vec![
                Expression::edge_property("e", "a"),
                Expression::edge_property("e", "b"),
            ]))
        );
    }

    #[test]
    fn test_map_keys_untouched() {
        let map = Expression::Map(vec![("age".to_string(), Expression::label("age"))]);
        assert_eq!(
            rewrite_sym_expr(map, "v", false),
            Some(Expression::Map(vec![(
                "age".to_string(),
                Expression::source_property("v", "age")
            )]))
        );
    }

    #[test]
    fn test_type_cast_operand() {
        let expr = Expression::type_cast(DataType::Int64, Expression::label("score"));
        assert_eq!(
            rewrite_sym_expr(expr, "v", false),
            Some(Expression::type_cast(
                DataType::Int64,
                Expression::source_property("v", "score")
            ))
        );
    }

    #[test]
    fn test_context_checks_on_scoped_properties() {
        assert!(rewrite_sym_expr(Expression::edge_property("e", "w"), "e", true).is_some());
        assert!(rewrite_sym_expr(Expression::edge_property("e", "w"), "v", false).is_none());
        assert!(rewrite_sym_expr(Expression::source_property("v", "w"), "v", false).is_some());
        assert!(rewrite_sym_expr(Expression::source_property("v", "w"), "e", true).is_none());
    }

    #[test]
    fn test_never_rewritable_kinds() {
        let cases = vec![
            Expression::subscript(Expression::label("l"), Expression::constant(0i64)),
            Expression::attribute(Expression::label("v"), Expression::label("name")),
            Expression::Uuid("x".to_string()),
            Expression::variable("var"),
            Expression::VersionedVariable {
                var: "var".to_string(),
                version: None,
            },
            Expression::tag_property("player", "name"),
            Expression::input_property("id"),
            Expression::variable_property("var", "id"),
            Expression::dest_property("player", "name"),
            Expression::EdgeSrcId("e".to_string()),
            Expression::EdgeType("e".to_string()),
            Expression::EdgeRank("e".to_string()),
            Expression::EdgeDst("e".to_string()),
        ];
        for expr in cases {
            let shown = expr.to_string();
            assert!(rewrite_sym_expr(expr.clone(), "e", true).is_none(), "{}", shown);
            assert!(rewrite_sym_expr(expr, "v", false).is_none(), "{}", shown);
        }
    }

    #[test]
    fn test_leaves_valid_in_both_contexts() {
        for expr in [Expression::constant(1i64), Expression::Vertex, Expression::Edge] {
            assert_eq!(rewrite_sym_expr(expr.clone(), "e", true), Some(expr.clone()));
            assert_eq!(rewrite_sym_expr(expr.clone(), "v", false), Some(expr));
        }
    }

    #[test]
    fn test_fault_inside_operand_propagates() {
        let expr = Expression::add(Expression::label("a"), Expression::input_property("b"));
        assert_eq!(rewrite_sym_expr(expr, "v", false), None);
    }
}

//! 表达式访问器
//!
//! 规划阶段对表达式树做改写的访问器

mod rewrite_sym_expr_visitor;

pub use rewrite_sym_expr_visitor::{
    rewrite_sym_expr, FaultUpdate, RewriteOutcome, RewriteSymExprVisitor,
};

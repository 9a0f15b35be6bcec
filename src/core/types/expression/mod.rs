//! 表达式树定义
//!
//! `Expression` 是谓词与属性引用使用的统一表达式类型，
//! 以封闭的枚举表示全部表达式种类。
//!
//! ## 所有权
//!
//! 复合表达式以独占方式持有子表达式（`Box` / `Vec`），
//! 替换子表达式时新子树的所有权转移给父节点，旧子树随即释放。
//!
//! ## 变体说明
//!
//! | 变体 | 用途 |
//! |------|------|
//! | `Constant` | 常量 |
//! | `Unary` / `TypeCast` | 单操作数运算 |
//! | `Label` / `LabelAttribute` | 未限定作用域的符号引用 |
//! | `Arithmetic` / `Relational` / `Logical` | 二元运算 |
//! | `FunctionCall` | 函数调用 |
//! | `List` / `Set` / `Map` | 容器字面量 |
//! | `*Property` | 限定作用域的属性引用 |
//! | `EdgeSrcId` / `EdgeType` / `EdgeRank` / `EdgeDst` | 边的内置属性 |
//! | `Vertex` / `Edge` | 当前顶点/边 |

mod constructors;
mod def;
mod display;

pub use def::Expression;

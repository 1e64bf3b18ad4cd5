//! AST node types.
//!
//! Nodes are immutable once allocated. Children are referenced by `ExprId`,
//! lists by `ExprRange` / `BindingRange` into the owning arena.

mod expr;
mod operators;

pub use expr::{Binding, ExprKind, Literal};
pub use operators::{BinaryOp, BinaryOpKind, LogicalOp, UnaryOp};

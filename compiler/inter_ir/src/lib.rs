//! Inter IR - node model for the Inter evaluator.
//!
//! This crate contains the data structures shared by the front-end and the
//! evaluator:
//! - `Name`s for interned identifiers
//! - `ExprId` / `ExprRange` handles into the arena
//! - AST nodes (`ExprKind`) and operator enums
//! - `ExprArena` flat storage and the `Program` it backs
//! - An s-expression dump for diagnostics
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers become `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)` indices
//!
//! A closure value only needs to remember the `ExprId` of its body, so the
//! arena must outlive every evaluation run over it.

mod arena;
pub mod ast;
mod dump;
mod expr_id;
mod interner;
mod name;

pub use arena::{ExprArena, Program};
pub use ast::{BinaryOp, BinaryOpKind, Binding, ExprKind, Literal, LogicalOp, UnaryOp};
pub use dump::{dump_expr, dump_program};
pub use expr_id::{BindingRange, ExprId, ExprRange};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;

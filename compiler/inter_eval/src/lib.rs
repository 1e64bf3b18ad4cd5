#![deny(clippy::arithmetic_side_effects)]
//! Inter Eval - tree-walking evaluator for Inter programs.
//!
//! # Architecture
//!
//! The evaluator separates *name resolution* from *storage*:
//! - `Heap`: append-only arena of mutable cells addressed by `Slot`
//! - `Environment`: persistent `Name -> Slot` map, captured by value in closures
//! - `Interpreter`: recursive dispatch over `ExprKind`, owning the heap
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//! - `evaluate`: the program driver, threading `Bind` effects between statements
//!
//! Because closures hold slots and not values, an `Assign` made after a
//! closure was created is visible when the closure runs, while a later `Bind`
//! of the same name is not.

mod environment;
pub mod errors;
mod heap;
mod interpreter;
mod operators;
mod program;
mod unary_operators;
mod value;

pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use heap::{Heap, Slot};
pub use interpreter::Interpreter;
pub use operators::evaluate_binary;
pub use program::evaluate;
pub use unary_operators::evaluate_unary;
pub use value::{Closure, Value, ValueKind};

#[cfg(test)]
mod tests;

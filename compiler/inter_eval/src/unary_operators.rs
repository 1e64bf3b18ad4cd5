//! Unary operator implementations for the evaluator.
//!
//! `!` negates a boolean. The numeric operators keep the behavior programs
//! already rely on: unary `+` yields the absolute value and unary `-`
//! multiplies by one, returning its operand unchanged.

use inter_ir::UnaryOp;

use crate::errors::{type_mismatch, EvalError, EvalResult};
use crate::{Value, ValueKind};

/// Evaluate a unary operation using direct pattern matching.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> EvalResult {
    match (value, op) {
        (Value::Bool(b), UnaryOp::Not) => Ok(Value::Bool(!b)),
        // Negative inputs are negated; `i64::MIN` wraps to itself.
        (Value::Number(n), UnaryOp::Plus) => Ok(Value::Number(n.wrapping_abs())),
        (Value::Number(n), UnaryOp::Minus) => Ok(Value::Number(*n)),
        (_, UnaryOp::Not) => Err(invalid_unary_operand(op, ValueKind::Boolean, value)),
        (_, UnaryOp::Plus | UnaryOp::Minus) => {
            Err(invalid_unary_operand(op, ValueKind::Number, value))
        }
    }
}

#[cold]
fn invalid_unary_operand(op: UnaryOp, expected: ValueKind, value: &Value) -> EvalError {
    type_mismatch(
        format!("unary `{}`", op.as_symbol()),
        expected,
        value.kind(),
    )
}

//! Binary operator implementations for the evaluator.
//!
//! Both operands must be numbers. Arithmetic wraps on overflow (two's
//! complement `i64`), division truncates toward zero, and comparisons use
//! signed ordering.

use inter_ir::BinaryOp;

use crate::errors::{division_by_zero, type_mismatch, EvalResult};
use crate::{Value, ValueKind};

/// Evaluate a binary operation using direct pattern matching.
///
/// When an operand is not a number, the error reports the first offending
/// operand (left before right).
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => eval_number_binary(*a, *b, op),
        (Value::Number(_), other) | (other, _) => Err(type_mismatch(
            format!("`{}`", op.as_symbol()),
            ValueKind::Number,
            other.kind(),
        )),
    }
}

fn eval_number_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    let value = match op {
        BinaryOp::Add => Value::Number(a.wrapping_add(b)),
        BinaryOp::Sub => Value::Number(a.wrapping_sub(b)),
        BinaryOp::Mul => Value::Number(a.wrapping_mul(b)),
        BinaryOp::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            // `i64::MIN / -1` wraps back to `i64::MIN`
            Value::Number(a.wrapping_div(b))
        }
        BinaryOp::Eq => Value::Bool(a == b),
        BinaryOp::NotEq => Value::Bool(a != b),
        BinaryOp::Lt => Value::Bool(a < b),
        BinaryOp::LtEq => Value::Bool(a <= b),
        BinaryOp::Gt => Value::Bool(a > b),
        BinaryOp::GtEq => Value::Bool(a >= b),
    };
    Ok(value)
}

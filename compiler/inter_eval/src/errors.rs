//! Centralized error types and constructors for the evaluator.
//!
//! Every runtime failure is terminal: the first error aborts the program and
//! is returned to the caller unchanged. Constructors live here so that error
//! wording stays in one place.
//!
//! # Usage
//!
//! ```ignore
//! use inter_eval::errors::{unbound_identifier, division_by_zero};
//! ```

use inter_ir::ExprId;

use crate::{Value, ValueKind};

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// Identifier lookup or assignment target not found in scope.
    #[error("unbound identifier: `{name}`")]
    UnboundIdentifier { name: String },

    /// Operand kind does not match what an operator, conditional or call requires.
    #[error("type mismatch in {context}: expected {expected}, got {got}")]
    TypeMismatch {
        context: String,
        expected: ValueKind,
        got: ValueKind,
    },

    #[error("division by zero")]
    DivisionByZero,

    /// Call expression's callee is not a closure.
    #[error("`{got}` is not callable")]
    NotCallable { got: ValueKind },

    /// Malformed tree: an operator token the front-end could not classify.
    #[error("unknown operator `{token}`")]
    UnknownOperator { token: String },
}

/// Evaluation error: the kind plus the node that raised it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Innermost node at which the error was raised, if known.
    pub expr: Option<ExprId>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind, expr: None }
    }

    /// Record where the error was raised. The innermost location wins.
    #[must_use]
    pub fn at(mut self, expr: ExprId) -> Self {
        if self.expr.is_none() {
            self.expr = Some(expr);
        }
        self
    }

    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Variable Errors

#[cold]
pub fn unbound_identifier(name: &str) -> EvalError {
    EvalErrorKind::UnboundIdentifier {
        name: name.to_string(),
    }
    .into()
}

// Operator Errors

#[cold]
pub fn type_mismatch(context: impl Into<String>, expected: ValueKind, got: ValueKind) -> EvalError {
    EvalErrorKind::TypeMismatch {
        context: context.into(),
        expected,
        got,
    }
    .into()
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

#[cold]
pub fn unknown_operator(token: &str) -> EvalError {
    EvalErrorKind::UnknownOperator {
        token: token.to_string(),
    }
    .into()
}

// Call Errors

#[cold]
pub fn not_callable(got: ValueKind) -> EvalError {
    EvalErrorKind::NotCallable { got }.into()
}

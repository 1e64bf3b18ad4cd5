//! Runtime values.
//!
//! Values are immutable once produced; mutation only ever happens by
//! overwriting a heap cell with a new value.

use std::fmt;

use inter_ir::{ExprId, Name};

use crate::Environment;

/// The runtime kind of a value, as reported in type errors.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ValueKind {
    Number,
    Boolean,
    Function,
    Void,
}

impl ValueKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Function => "function",
            Self::Void => "void",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A function value: parameter, body, and the environment it was created in.
///
/// The environment is a snapshot of the name table only; the cells it points
/// at are shared with every other environment that resolves to them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Closure {
    pub env: Environment,
    pub param: Name,
    pub body: ExprId,
}

/// Runtime value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Number(i64),
    Bool(bool),
    Closure(Closure),
    /// Result of `Bind` and `Assign` statements.
    Void,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Closure(_) => ValueKind::Function,
            Value::Void => ValueKind::Void,
        }
    }

    /// Get the type name of this value.
    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Value::Void)
    }

    /// Prose rendering, e.g. `a number value of 15`.
    pub fn describe(&self) -> String {
        match self {
            Value::Number(n) => format!("a number value of {n}"),
            Value::Bool(b) => format!("a boolean value of {b}"),
            Value::Closure(_) => "a function value".to_string(),
            Value::Void => "a void value".to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "(number {n})"),
            Value::Bool(b) => write!(f, "(boolean {b})"),
            Value::Closure(_) => write!(f, "(function)"),
            Value::Void => write!(f, "void"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

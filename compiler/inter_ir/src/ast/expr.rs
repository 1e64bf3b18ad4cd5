//! Expression nodes.

use super::{BinaryOp, LogicalOp, UnaryOp};
use crate::{BindingRange, ExprId, ExprRange, Name};

/// Literal payload of a `Literal` node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Number(i64),
    Bool(bool),
}

/// One `(name, init)` pair of a `Bind` statement.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Binding {
    pub name: Name,
    pub init: ExprId,
}

/// Expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    Literal(Literal),

    Unary {
        op: UnaryOp,
        operand: ExprId,
    },

    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// `&&` / `||`; the right operand is only evaluated when needed.
    Logical {
        op: LogicalOp,
        left: ExprId,
        right: ExprId,
    },

    Conditional {
        test: ExprId,
        consequent: ExprId,
        alternate: ExprId,
    },

    Ident(Name),

    /// Sequential bindings visible to the following sibling statements.
    Bind(BindingRange),

    /// Single-parameter function literal.
    Function {
        param: Name,
        body: ExprId,
    },

    Call {
        callee: ExprId,
        argument: ExprId,
    },

    /// Overwrite the slot `target` already resolves to.
    Assign {
        target: Name,
        value: ExprId,
    },

    /// Statement sequence yielding its last value.
    Block(ExprRange),

    /// An operator token the front-end did not recognise.
    ///
    /// Inert until evaluated.
    Malformed {
        token: Name,
    },
}

//! S-expression rendering of the tree, for `--print-ast` and error context.

use std::fmt;

use crate::ast::{ExprKind, Literal};
use crate::{ExprArena, ExprId, Name, Program, StringInterner};

/// Render one expression (and its children) as an s-expression.
pub fn dump_expr(arena: &ExprArena, interner: &StringInterner, id: ExprId) -> String {
    ExprDump {
        arena,
        interner,
        id,
    }
    .to_string()
}

/// Render every top-level statement, one per line.
pub fn dump_program(program: &Program, interner: &StringInterner) -> String {
    program
        .statements()
        .iter()
        .map(|&id| dump_expr(program.arena(), interner, id))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Display adapter for the subtree rooted at `id`.
struct ExprDump<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    id: ExprId,
}

impl fmt::Display for ExprDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.expr(f, self.id)
    }
}

impl ExprDump<'_> {
    fn name(&self, f: &mut fmt::Formatter<'_>, name: Name) -> fmt::Result {
        if name == Name::EMPTY {
            f.write_str("_")
        } else {
            f.write_str(self.interner.lookup(name))
        }
    }

    fn expr(&self, f: &mut fmt::Formatter<'_>, id: ExprId) -> fmt::Result {
        match *self.arena.get_expr(id) {
            ExprKind::Literal(Literal::Number(n)) => write!(f, "(number {n})"),
            ExprKind::Literal(Literal::Bool(b)) => write!(f, "(boolean {b})"),
            ExprKind::Unary { op, operand } => {
                write!(f, "(unary {} ", op.as_symbol())?;
                self.expr(f, operand)?;
                f.write_str(")")
            }
            ExprKind::Binary { op, left, right } => {
                write!(f, "({} {} ", op.kind().as_str(), op.as_symbol())?;
                self.pair(f, left, right)
            }
            ExprKind::Logical { op, left, right } => {
                write!(f, "(logical {} ", op.as_symbol())?;
                self.pair(f, left, right)
            }
            ExprKind::Conditional {
                test,
                consequent,
                alternate,
            } => {
                f.write_str("(conditional ")?;
                self.expr(f, test)?;
                f.write_str(" ")?;
                self.pair(f, consequent, alternate)
            }
            ExprKind::Ident(name) => self.name(f, name),
            ExprKind::Bind(range) => {
                f.write_str("(let")?;
                for binding in self.arena.get_bindings(range) {
                    f.write_str(" [")?;
                    self.name(f, binding.name)?;
                    f.write_str(" ")?;
                    self.expr(f, binding.init)?;
                    f.write_str("]")?;
                }
                f.write_str(")")
            }
            ExprKind::Function { param, body } => {
                f.write_str("(function ")?;
                self.name(f, param)?;
                f.write_str(" ")?;
                self.expr(f, body)?;
                f.write_str(")")
            }
            ExprKind::Call { callee, argument } => {
                f.write_str("(call ")?;
                self.pair(f, callee, argument)
            }
            ExprKind::Assign { target, value } => {
                f.write_str("(assign ")?;
                self.name(f, target)?;
                f.write_str(" ")?;
                self.expr(f, value)?;
                f.write_str(")")
            }
            ExprKind::Block(range) => {
                f.write_str("(block")?;
                for &stmt in self.arena.get_expr_list(range) {
                    f.write_str(" ")?;
                    self.expr(f, stmt)?;
                }
                f.write_str(")")
            }
            ExprKind::Malformed { token } => {
                f.write_str("(malformed ")?;
                self.name(f, token)?;
                f.write_str(")")
            }
        }
    }

    /// Two children followed by the closing paren.
    fn pair(&self, f: &mut fmt::Formatter<'_>, first: ExprId, second: ExprId) -> fmt::Result {
        self.expr(f, first)?;
        f.write_str(" ")?;
        self.expr(f, second)?;
        f.write_str(")")
    }
}

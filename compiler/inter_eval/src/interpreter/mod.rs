//! Tree-walking interpreter.
//!
//! The interpreter owns the heap for one run and borrows the arena it
//! walks. Environments are passed in by the caller: statement positions get
//! a mutable handle so `Bind` can extend the scope seen by later siblings,
//! every other position sees a read-only environment and builds extended
//! copies for the scopes it opens (blocks and closure bodies).

mod function_call;

use inter_ir::{
    BindingRange, ExprArena, ExprId, ExprKind, ExprRange, Literal, LogicalOp, Name, StringInterner,
};

use crate::errors::{type_mismatch, unbound_identifier, unknown_operator};
use crate::{
    evaluate_binary, evaluate_unary, Closure, Environment, EvalResult, Heap, Value, ValueKind,
};

/// Tree-walking interpreter for a single program run.
pub struct Interpreter<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    heap: Heap,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with an empty heap.
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner) -> Self {
        Interpreter {
            arena,
            interner,
            heap: Heap::new(),
        }
    }

    /// The cells allocated so far.
    pub fn heap(&self) -> &Heap {
        &self.heap
    }

    /// Evaluate `id` in statement position.
    ///
    /// A `Bind` extends `env` in place; any other node leaves it untouched.
    pub fn eval(&mut self, id: ExprId, env: &mut Environment) -> EvalResult {
        match *self.arena.get_expr(id) {
            ExprKind::Bind(bindings) => self.eval_bind(bindings, env),
            _ => self.eval_expr(id, env),
        }
    }

    /// Evaluate `id` against a read-only environment.
    #[tracing::instrument(level = "trace", skip(self, env))]
    pub fn eval_expr(&mut self, id: ExprId, env: &Environment) -> EvalResult {
        match *self.arena.get_expr(id) {
            ExprKind::Literal(Literal::Number(n)) => Ok(Value::Number(n)),
            ExprKind::Literal(Literal::Bool(b)) => Ok(Value::Bool(b)),

            ExprKind::Unary { op, operand } => {
                let value = self.eval_expr(operand, env)?;
                evaluate_unary(&value, op).map_err(|e| e.at(id))
            }

            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left, env)?;
                let right = self.eval_expr(right, env)?;
                evaluate_binary(&left, &right, op).map_err(|e| e.at(id))
            }

            ExprKind::Logical { op, left, right } => self.eval_logical(id, op, left, right, env),

            ExprKind::Conditional {
                test,
                consequent,
                alternate,
            } => match self.eval_expr(test, env)? {
                Value::Bool(true) => self.eval_expr(consequent, env),
                Value::Bool(false) => self.eval_expr(alternate, env),
                other => Err(type_mismatch("conditional", ValueKind::Boolean, other.kind()).at(id)),
            },

            ExprKind::Ident(name) => match env.lookup(name, &self.heap) {
                Some(value) => Ok(value.clone()),
                None => Err(unbound_identifier(&self.name_text(name)).at(id)),
            },

            // Outside a statement sequence there are no later siblings to
            // see the new names, so they go into a throwaway scope.
            ExprKind::Bind(bindings) => {
                let mut scratch = env.clone();
                self.eval_bind(bindings, &mut scratch)
            }

            ExprKind::Function { param, body } => Ok(Value::Closure(Closure {
                env: env.clone(),
                param,
                body,
            })),

            ExprKind::Call { callee, argument } => self.eval_call(id, callee, argument, env),

            ExprKind::Assign { target, value } => {
                let Some(slot) = env.resolve(target) else {
                    return Err(unbound_identifier(&self.name_text(target)).at(id));
                };
                let value = self.eval_expr(value, env)?;
                self.heap.set(slot, value);
                Ok(Value::Void)
            }

            ExprKind::Block(stmts) => {
                let mut scope = env.clone();
                self.eval_sequence(stmts, &mut scope)
            }

            ExprKind::Malformed { token } => Err(unknown_operator(&self.name_text(token)).at(id)),
        }
    }

    /// Evaluate statements in order, threading `Bind` effects through `env`.
    ///
    /// Yields the last statement's value, or `Void` for an empty sequence.
    pub fn eval_sequence(&mut self, stmts: ExprRange, env: &mut Environment) -> EvalResult {
        let arena = self.arena;
        self.eval_statements(arena.get_expr_list(stmts), env)
    }

    /// Run a statement list, folding each `Bind` into `env`.
    pub fn eval_statements(&mut self, stmts: &[ExprId], env: &mut Environment) -> EvalResult {
        let mut result = Value::Void;
        for (index, &stmt) in stmts.iter().enumerate() {
            tracing::trace!(index, ?stmt, "statement");
            result = self.eval(stmt, env)?;
        }
        Ok(result)
    }

    /// Source text of `name` for diagnostics.
    ///
    /// A name the interner does not know renders as `#<raw>`.
    fn name_text(&self, name: Name) -> String {
        self.interner
            .try_lookup(name)
            .map_or_else(|| format!("#{}", name.raw()), str::to_string)
    }

    /// `let*`: each initializer sees the names bound before it.
    fn eval_bind(&mut self, bindings: BindingRange, env: &mut Environment) -> EvalResult {
        let arena = self.arena;
        for binding in arena.get_bindings(bindings) {
            let value = self.eval_expr(binding.init, env)?;
            *env = env.extend(binding.name, value, &mut self.heap);
        }
        Ok(Value::Void)
    }

    fn eval_logical(
        &mut self,
        id: ExprId,
        op: LogicalOp,
        left: ExprId,
        right: ExprId,
        env: &Environment,
    ) -> EvalResult {
        let context = || format!("`{}`", op.as_symbol());
        let left = match self.eval_expr(left, env)? {
            Value::Bool(b) => b,
            other => return Err(type_mismatch(context(), ValueKind::Boolean, other.kind()).at(id)),
        };
        match (op, left) {
            (LogicalOp::Or, true) => return Ok(Value::Bool(true)),
            (LogicalOp::And, false) => return Ok(Value::Bool(false)),
            _ => {}
        }
        match self.eval_expr(right, env)? {
            Value::Bool(b) => Ok(Value::Bool(b)),
            other => Err(type_mismatch(context(), ValueKind::Boolean, other.kind()).at(id)),
        }
    }
}

#[cfg(test)]
mod tests;

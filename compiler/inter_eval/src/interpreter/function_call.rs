//! Function call evaluation methods for the Interpreter.

use inter_ir::ExprId;

use super::Interpreter;
use crate::errors::not_callable;
use crate::{Closure, Environment, EvalResult, Value};

impl Interpreter<'_> {
    /// Evaluate `callee(argument)`.
    ///
    /// The callee is checked before the argument is evaluated. The argument
    /// is evaluated in the caller's scope, the body in the closure's.
    pub(super) fn eval_call(
        &mut self,
        id: ExprId,
        callee: ExprId,
        argument: ExprId,
        env: &Environment,
    ) -> EvalResult {
        let closure = match self.eval_expr(callee, env)? {
            Value::Closure(closure) => closure,
            other => return Err(not_callable(other.kind()).at(id)),
        };
        let argument = self.eval_expr(argument, env)?;
        self.call_closure(&closure, argument)
    }

    /// Apply `closure` to an already evaluated argument.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn call_closure(&mut self, closure: &Closure, argument: Value) -> EvalResult {
        let call_env = closure.env.extend(closure.param, argument, &mut self.heap);
        self.eval_expr(closure.body, &call_env)
    }
}

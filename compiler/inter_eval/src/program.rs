//! Program driver.

use inter_ir::{Program, StringInterner};

use crate::{Environment, EvalResult, Interpreter};

/// Evaluate a whole program with a fresh environment and heap.
///
/// Top-level statements run in order exactly like a block body; the value of
/// the last one is the program's result. The first error aborts the run.
///
/// `interner` should be the one the program was lowered with. With any other
/// interner, identifiers in error messages fall back to `#<raw>`.
#[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements().len()))]
pub fn evaluate(program: &Program, interner: &StringInterner) -> EvalResult {
    let mut interpreter = Interpreter::new(program.arena(), interner);
    let mut env = Environment::new();
    let result = interpreter.eval_statements(program.statements(), &mut env);
    match &result {
        Ok(value) => tracing::debug!(
            %value,
            cells = interpreter.heap().len(),
            "program finished"
        ),
        Err(error) => tracing::debug!(%error, "program aborted"),
    }
    result
}

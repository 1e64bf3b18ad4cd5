//! Inter Front - turns an ESTree-shaped JSON document into a `Program`.
//!
//! The front-end owns every structural check: unknown node types, missing
//! fields, empty blocks, wrong parameter or argument counts. Operator tokens
//! it cannot classify are not errors here; they lower to
//! `ExprKind::Malformed` and only fail if the evaluator reaches them.

mod errors;
mod lower;
mod node;

pub use errors::FrontendError;

use inter_ir::{Program, StringInterner};

/// Lower an already parsed JSON document.
#[tracing::instrument(level = "debug", skip_all)]
pub fn lower(
    json: &serde_json::Value,
    interner: &StringInterner,
) -> Result<Program, FrontendError> {
    let root = node::Node::new(json)?;
    let program = lower::Lowerer::new(interner).lower_program(root)?;
    tracing::debug!(
        statements = program.statements().len(),
        nodes = program.arena().expr_count(),
        "lowered program"
    );
    Ok(program)
}

/// Parse JSON text and lower it.
pub fn parse_program(text: &str, interner: &StringInterner) -> Result<Program, FrontendError> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    lower(&json, interner)
}

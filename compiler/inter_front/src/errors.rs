//! Front-end errors.
//!
//! Everything here is reported before evaluation starts.

/// Structural problem in the input document.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a node object, found {found}")]
    ExpectedNode { found: &'static str },

    #[error("expected a `Program` node, found `{0}`")]
    NotAProgram(String),

    #[error("`{node}` node is missing field `{field}`")]
    MissingField { node: String, field: &'static str },

    #[error("field `{field}` of `{node}` node must be {expected}")]
    WrongFieldType {
        node: String,
        field: &'static str,
        expected: &'static str,
    },

    #[error("unknown node type `{0}`")]
    UnknownNodeType(String),

    #[error("block statement has no statements")]
    EmptyBlock,

    #[error("program has no statements")]
    EmptyProgram,

    #[error("function declares {0} parameters, at most one is supported")]
    TooManyParameters(usize),

    #[error("call passes {0} arguments, exactly one is required")]
    ArgumentCount(usize),

    /// Assignment to anything other than a plain identifier.
    #[error("cannot assign to `{0}` node")]
    InvalidAssignmentTarget(String),

    #[error("invalid literal `{0}`")]
    InvalidLiteral(String),
}

impl FrontendError {
    /// Whether the input was not JSON at all, as opposed to a bad tree.
    pub fn is_json(&self) -> bool {
        matches!(self, FrontendError::Json(_))
    }
}

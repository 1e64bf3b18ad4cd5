//! Command handlers for the Inter driver.
//!
//! Argument parsing lives in `args`, the evaluation pipeline in `run`.

mod args;
mod run;

pub use args::{parse_args, Command, RunOptions, UsageError};
pub use run::{run_file, run_source};

/// Process exit status.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Exit {
    Success,
    /// Input could not be read, or was not JSON.
    Input,
    /// The program raised a runtime error.
    Eval,
    /// The JSON did not describe a valid program.
    Frontend,
    Usage,
}

impl Exit {
    pub const fn code(self) -> i32 {
        match self {
            Exit::Success => 0,
            Exit::Input => 1,
            Exit::Eval => 2,
            Exit::Frontend => 3,
            Exit::Usage => 64,
        }
    }
}

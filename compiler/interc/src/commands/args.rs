//! Hand-rolled argument parsing for `inter [OPTIONS] [FILE]`.

use std::path::PathBuf;

/// What the driver was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(RunOptions),
    Help,
    Version,
}

/// Options for evaluating one program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Program file; stdin when absent.
    pub path: Option<PathBuf>,
    /// Print each top-level statement's tree before evaluating.
    pub print_ast: bool,
    /// Render the result in prose rather than as an s-expression.
    pub describe: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("unexpected argument `{0}`: only one input file is accepted")]
    ExtraArgument(String),
}

/// Parse arguments, excluding the program name.
///
/// Parsing stops at `--help` or `--version`; `-` names stdin.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command, UsageError> {
    let mut options = RunOptions::default();
    let mut saw_stdin = false;

    for arg in args {
        let arg = arg.as_ref();
        match arg {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--print-ast" => options.print_ast = true,
            "--describe" => options.describe = true,
            "-" if options.path.is_none() && !saw_stdin => saw_stdin = true,
            _ if arg.starts_with('-') && arg != "-" => {
                return Err(UsageError::UnknownOption(arg.to_string()));
            }
            _ if options.path.is_none() && !saw_stdin => {
                options.path = Some(PathBuf::from(arg));
            }
            _ => return Err(UsageError::ExtraArgument(arg.to_string())),
        }
    }

    Ok(Command::Run(options))
}

//! Inter driver library.
//!
//! The `inter` binary is a thin shell over this crate so that argument
//! parsing and the read-lower-evaluate-render pipeline can be tested without
//! spawning a process.
//!
//! # Environment
//!
//! - `RUST_LOG=inter_eval=trace`: trace evaluation (statements, calls, cell
//!   allocation). Nothing is logged when `RUST_LOG` is unset.
//! - `INTER_LOG_TREE`: any value renders spans as an indented tree instead of
//!   flat lines.

pub mod commands;
mod tracing_setup;

pub use commands::{parse_args, run_file, run_source, Command, Exit, RunOptions, UsageError};
pub use tracing_setup::init_tracing;

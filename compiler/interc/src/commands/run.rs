//! The run pipeline: read JSON, lower it, evaluate it, render the outcome.

use std::io::{self, Read, Write};

use inter_eval::evaluate;
use inter_ir::{dump_expr, dump_program, StringInterner};

use super::{Exit, RunOptions};

/// Evaluate the program named by `options` and report on stdio.
pub fn run_file(options: &RunOptions) -> Exit {
    let source = match read_input(options) {
        Ok(source) => source,
        Err(e) => {
            let origin = options
                .path
                .as_ref()
                .map_or_else(|| "stdin".to_string(), |p| format!("'{}'", p.display()));
            eprintln!("error: unable to read {origin}: {e}");
            return Exit::Input;
        }
    };

    tracing::debug!(bytes = source.len(), "read program");

    let stdout = io::stdout();
    let stderr = io::stderr();
    run_source(&source, options, &mut stdout.lock(), &mut stderr.lock()).unwrap_or_else(|e| {
        eprintln!("error: unable to write output: {e}");
        Exit::Input
    })
}

fn read_input(options: &RunOptions) -> io::Result<String> {
    match &options.path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// Lower and evaluate `source`, writing the outcome to `out` and diagnostics
/// to `err`.
///
/// On success `out` gets `(value ...)`, or the prose description under
/// `--describe`. A runtime error writes `(error "...")` to `out`. Front-end
/// failures never reach evaluation.
pub fn run_source<W: Write, E: Write>(
    source: &str,
    options: &RunOptions,
    out: &mut W,
    err: &mut E,
) -> io::Result<Exit> {
    let interner = StringInterner::new();
    let program = match inter_front::parse_program(source, &interner) {
        Ok(program) => program,
        Err(e) => {
            writeln!(err, "error: {e}")?;
            return Ok(if e.is_json() {
                Exit::Input
            } else {
                Exit::Frontend
            });
        }
    };

    if options.print_ast {
        writeln!(out, "{}", dump_program(&program, &interner))?;
    }

    match evaluate(&program, &interner) {
        Ok(value) => {
            if options.describe {
                writeln!(out, "{}", value.describe())?;
            } else {
                writeln!(out, "(value {value})")?;
            }
            Ok(Exit::Success)
        }
        Err(e) => {
            writeln!(out, "(error {:?})", e.to_string())?;
            if let Some(expr) = e.expr {
                writeln!(err, "  in {}", dump_expr(program.arena(), &interner, expr))?;
            }
            Ok(Exit::Eval)
        }
    }
}

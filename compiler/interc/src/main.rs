//! Inter CLI
//!
//! Evaluates a program given as ESTree JSON on stdin or in a file.

use interc::{init_tracing, parse_args, run_file, Command, Exit};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let exit = match parse_args(args.as_slice()) {
        Ok(Command::Run(options)) => run_file(&options),
        Ok(Command::Help) => {
            print_usage();
            Exit::Success
        }
        Ok(Command::Version) => {
            println!("inter {}", env!("CARGO_PKG_VERSION"));
            Exit::Success
        }
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Usage: inter [--print-ast] [--describe] [FILE]");
            Exit::Usage
        }
    };

    std::process::exit(exit.code());
}

fn print_usage() {
    println!("Inter - evaluate ESTree JSON programs");
    println!();
    println!("Usage: inter [OPTIONS] [FILE]");
    println!();
    println!("Reads the program from FILE, or from stdin when FILE is absent or `-`.");
    println!();
    println!("Options:");
    println!("  --print-ast    Print each top-level statement before evaluating");
    println!("  --describe     Render the result in prose");
    println!("  -h, --help     Print this help");
    println!("  -V, --version  Print the version");
    println!();
    println!("Exit status:");
    println!("  0   success");
    println!("  1   input unreadable or not JSON");
    println!("  2   runtime error");
    println!("  3   malformed program");
    println!("  64  usage error");
}

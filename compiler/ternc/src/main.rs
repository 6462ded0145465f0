//! Tern CLI

use std::path::Path;

use ternc::commands::{run_file, RunError, RunOptions};

fn main() {
    ternc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: ternc run <program.json> [--max-depth=<n>]");
                std::process::exit(1);
            }
            let options = match RunOptions::parse(args[3..].iter().map(String::as_str)) {
                Ok(options) => options,
                Err(flag) => {
                    eprintln!("error: unknown option '{flag}'");
                    std::process::exit(1);
                }
            };
            let result = run_file(Path::new(&args[2]), &options, tern_eval::stdout_handler());
            if let Err(err) = result {
                report(&err);
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("ternc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn report(err: &RunError) {
    eprintln!("error: {err}");
    if let RunError::Eval(eval) = err {
        if let Some(backtrace) = &eval.backtrace {
            eprint!("{backtrace}");
        }
    }
}

fn print_usage() {
    println!("Tern module runner");
    println!();
    println!("Usage: ternc <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <program.json>   Evaluate a JSON-encoded module");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --max-depth=<n>      Maximum scope depth (default: 20000)");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=tern_eval=debug) for evaluator tracing.");
}

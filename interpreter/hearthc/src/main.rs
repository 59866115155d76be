//! Hearth CLI entry point.
//!
//! Thin dispatcher over the command handlers; all real work happens in
//! `hearthc::commands` and `hearthc::pipeline`.

use hearthc::commands::{lex_file, parse_file, run_file, run_repl};
use hearthc::pipeline::USAGE_EXIT;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        std::process::exit(run_repl());
    }

    let command = &args[1];

    let code = match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: hearth run <file.hth>");
                std::process::exit(USAGE_EXIT);
            }
            run_file(&args[2])
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: hearth lex <file.hth>");
                std::process::exit(USAGE_EXIT);
            }
            lex_file(&args[2])
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: hearth parse <file.hth>");
                std::process::exit(USAGE_EXIT);
            }
            parse_file(&args[2])
        }
        "repl" => run_repl(),
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-v" => {
            println!("Hearth {}", env!("CARGO_PKG_VERSION"));
            0
        }
        _ => {
            // A bare file path runs it, matching `hearth run <file>`.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("hth"))
                || std::path::Path::new(command).is_file()
            {
                run_file(command)
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                USAGE_EXIT
            }
        }
    };

    std::process::exit(code);
}

/// Install the tracing subscriber, filtered by `HEARTH_LOG`. Silent unless
/// the variable is set.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("HEARTH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!("Hearth interpreter");
    println!();
    println!("Usage: hearth [command] [options]");
    println!();
    println!("Commands:");
    println!("  run <file.hth>    Run a Hearth program");
    println!("  repl              Start an interactive session (default)");
    println!("  lex <file.hth>    Tokenize and display tokens");
    println!("  parse <file.hth>  Parse and display the syntax tree");
    println!("  help              Show this help message");
    println!("  version           Show version information");
    println!();
    println!("Running `hearth <file.hth>` is shorthand for `hearth run`.");
    println!("With no arguments, `hearth` starts the REPL.");
    println!();
    println!("Environment:");
    println!("  HEARTH_LOG        Tracing filter, e.g. `hearth_parse=trace`");
    println!();
    println!("Exit codes:");
    println!("  0   success");
    println!("  64  usage error");
    println!("  65  syntax error");
    println!("  70  runtime error");
}

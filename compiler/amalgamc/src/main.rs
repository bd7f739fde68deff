//! Amalgam compiler CLI.

use amalgamc::commands::{check_lines, explain_code, parse_line, repl, run_file};

fn main() {
    amalgamc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        repl();
        return;
    }

    match args[1].as_str() {
        "parse" => {
            if args.len() != 3 {
                eprintln!("Usage: amalgam parse \"<statement>\"");
                std::process::exit(1);
            }
            parse_line(&args[2]);
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: amalgam check \"<statement>\" [\"<statement>\" ...]");
                std::process::exit(1);
            }
            check_lines(&args[2..]);
        }
        "run" => {
            if args.len() != 3 {
                eprintln!("Usage: amalgam run <file>");
                std::process::exit(1);
            }
            run_file(&args[2]);
        }
        "explain" => {
            if args.len() != 3 {
                eprintln!("Usage: amalgam explain <error-code>");
                std::process::exit(1);
            }
            explain_code(&args[2]);
        }
        "repl" => {
            repl();
        }
        other => {
            eprintln!("error: unknown command `{other}`");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!();
    eprintln!("Usage: amalgam [command]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  parse \"<statement>\"   Build one statement and dump its tree");
    eprintln!("  check \"<statement>\"..  Build and type-check statements in one scope");
    eprintln!("  run <file>            Compile and evaluate a file, one statement per line");
    eprintln!("  explain <error-code>  Describe a diagnostic code, e.g. E1001");
    eprintln!("  repl                  Interactive loop (also the default with no command)");
}

//! CLI command implementations.

use std::io::{self, BufRead, Write};

use amalgam_diagnostic::{span_utils, Diagnostic, ErrorCode};

use crate::session::Session;

/// Render a diagnostic against the statement line it came from,
/// substituting the real file line number for the per-statement one.
fn render_at(path: &str, line_number: usize, line: &str, diag: &Diagnostic) -> String {
    match diag.span {
        Some(span) => {
            let (_, col) = span_utils::line_col(line, span.start);
            format!("{path}:{line_number}:{col}: {diag}")
        }
        None => format!("{path}:{line_number}: {diag}"),
    }
}

fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: cannot read `{path}`: {e}");
            std::process::exit(1);
        }
    }
}

/// The `parse` command: dump one statement's tree.
pub fn parse_line(line: &str) {
    let mut session = Session::new("repl");
    match session.add_statement(line) {
        Ok(Some(root)) => println!("{}", session.dump(root)),
        Ok(None) => {}
        Err(diag) => {
            eprintln!("{}", span_utils::render(line, &diag));
            std::process::exit(1);
        }
    }
}

/// The `check` command: build and analyze the given statements in
/// order, reporting every violation. Statements share one scope, so
/// later lines see earlier bindings.
pub fn check_lines(lines: &[String]) {
    let mut session = Session::new("check");
    let mut failed = false;
    for line in lines {
        if let Err(diag) = session.add_statement(line) {
            eprintln!("{}", span_utils::render(line, &diag));
            failed = true;
            continue;
        }
        // Checking after every statement keeps each diagnostic paired
        // with the line it came from; earlier clean statements are
        // cached and stay silent.
        let errors = session.check();
        if !errors.is_empty() {
            for diag in &errors {
                eprintln!("{}", span_utils::render(line, diag));
            }
            session.retract_last_statement();
            failed = true;
        }
    }
    if failed {
        std::process::exit(1);
    }
    println!("ok");
}

/// The `run` command: compile a file one statement per line, evaluate
/// the default method, and print the last statement's value.
pub fn run_file(path: &str) {
    let content = read_file(path);
    let mut session = Session::new(path);
    let mut failed = false;

    for (idx, line) in content.lines().enumerate() {
        let line_number = idx + 1;
        if let Err(diag) = session.add_statement(line) {
            eprintln!("{}", render_at(path, line_number, line, &diag));
            failed = true;
            continue;
        }
        let errors = session.check();
        if !errors.is_empty() {
            for diag in &errors {
                eprintln!("{}", render_at(path, line_number, line, diag));
            }
            session.retract_last_statement();
            failed = true;
        }
    }
    if failed {
        std::process::exit(1);
    }

    let result = session.lower_default().and_then(|t| session.evaluate(&t));
    match result {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {}
        Err(diag) => {
            eprintln!("{path}: {diag}");
            std::process::exit(1);
        }
    }
}

/// The `explain` command: short documentation for an error code.
pub fn explain_code(code_str: &str) {
    match code_str.parse::<ErrorCode>() {
        Ok(code) => println!("{code}: {}", code.description()),
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Codes have the format EXXXX, e.g. E1001.");
            std::process::exit(1);
        }
    }
}

/// The interactive loop. Reads one statement per line at a `] `
/// prompt, prints each statement's value, and exits at end of input.
/// Bindings persist across lines; a failed line is retracted so it is
/// not re-reported.
pub fn repl() {
    let stdin = io::stdin();
    let mut session = Session::new("repl");
    let mut input = String::new();

    loop {
        print!("] ");
        let _ = io::stdout().flush();

        input.clear();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("error: {e}");
                break;
            }
        }
        let line = input.trim_end();

        match session.add_statement(line) {
            Ok(Some(_)) => {}
            Ok(None) => continue,
            Err(diag) => {
                eprintln!("{}", span_utils::render(line, &diag));
                continue;
            }
        }

        let errors = session.check();
        if !errors.is_empty() {
            for diag in &errors {
                eprintln!("{}", span_utils::render(line, diag));
            }
            session.retract_last_statement();
            continue;
        }

        // Evaluation replays the whole method; statements are pure, so
        // only the freshly added one changes the result.
        match session.lower_default().and_then(|t| session.evaluate(&t)) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {}
            Err(diag) => {
                eprintln!("{diag}");
                session.retract_last_statement();
            }
        }
    }
}

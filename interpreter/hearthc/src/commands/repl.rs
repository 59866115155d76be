//! Interactive prompt.
//!
//! One interpreter lives for the whole session, so variables persist from
//! line to line. The sink is reset between lines: a typo must not mark the
//! rest of the session as failed. The REPL always exits 0 for program
//! errors; only the session-level outcome matters.

use std::io::{BufRead, Write};

use hearth_diagnostic::DiagnosticSink;
use hearth_eval::Interpreter;

use super::report_errors;
use crate::pipeline::run_source;

const PROMPT: &str = "hearth> ";

/// Run the read-eval-print loop until EOF or `:quit`.
pub fn run_repl() -> i32 {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut interpreter = Interpreter::new();
    let mut sink = DiagnosticSink::new();

    loop {
        let _ = write!(stdout, "{PROMPT}");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            // EOF (Ctrl-D) or a read failure both end the session.
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == ":quit" {
            break;
        }

        run_source(line, &mut interpreter, &mut sink);
        report_errors(&sink, line);
        sink.reset();
    }

    0
}

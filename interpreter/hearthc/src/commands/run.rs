//! `hearth run <file>`: the default command.

use hearth_diagnostic::DiagnosticSink;
use hearth_eval::Interpreter;

use super::{read_file, report_errors};
use crate::pipeline::run_source;

/// Run a program file. Returns the process exit code.
pub fn run_file(path: &str) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(code) => return code,
    };

    let mut interpreter = Interpreter::new();
    let mut sink = DiagnosticSink::new();
    let outcome = run_source(&source, &mut interpreter, &mut sink);
    report_errors(&sink, &source);
    outcome.exit_code()
}

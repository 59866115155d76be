//! The scan → parse → interpret pipeline and its exit-code mapping.

use hearth_diagnostic::{runtime_error, DiagnosticSink};
use hearth_eval::Interpreter;
use tracing::debug;

/// How a run ended. Syntax errors win over runtime errors by construction:
/// a program with syntax errors is never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Success,
    SyntaxError,
    RuntimeError,
}

impl RunOutcome {
    /// Process exit code, following the sysexits convention: `EX_DATAERR`
    /// (65) for syntax errors, `EX_SOFTWARE` (70) for runtime errors.
    pub fn exit_code(self) -> i32 {
        match self {
            RunOutcome::Success => 0,
            RunOutcome::SyntaxError => 65,
            RunOutcome::RuntimeError => 70,
        }
    }
}

/// Exit code for usage errors: unknown command or missing argument.
pub const USAGE_EXIT: i32 = 64;

/// Run one source text against an interpreter.
///
/// All diagnostics land in `sink`; nothing is printed here. The interpreter
/// keeps its environment regardless of the outcome, so the REPL can pass
/// the same one back in for the next line.
pub fn run_source(
    source: &str,
    interpreter: &mut Interpreter,
    sink: &mut DiagnosticSink,
) -> RunOutcome {
    let tokens = hearth_lexer::scan(source, sink);
    let statements = hearth_parse::parse(tokens, sink);
    if sink.had_syntax_error() {
        debug!(count = sink.len(), "skipping interpretation");
        return RunOutcome::SyntaxError;
    }

    match interpreter.interpret(&statements) {
        Ok(()) => RunOutcome::Success,
        Err(err) => {
            sink.report(runtime_error(&err.token, &err.message));
            RunOutcome::RuntimeError
        }
    }
}

#[cfg(test)]
mod tests {
    use hearth_eval::{PrintHandler, Value};
    use pretty_assertions::assert_eq;

    use super::*;

    fn run(source: &str) -> (RunOutcome, DiagnosticSink) {
        let mut interpreter = Interpreter::with_printer(PrintHandler::buffer());
        let mut sink = DiagnosticSink::new();
        let outcome = run_source(source, &mut interpreter, &mut sink);
        (outcome, sink)
    }

    #[test]
    fn clean_program_exits_zero() {
        let (outcome, sink) = run("var x = 1; print x;");
        assert_eq!(outcome, RunOutcome::Success);
        assert_eq!(outcome.exit_code(), 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn syntax_error_exits_65_and_skips_interpretation() {
        let (outcome, sink) = run("print ghost"); // missing `;`
        assert_eq!(outcome, RunOutcome::SyntaxError);
        assert_eq!(outcome.exit_code(), 65);
        // `ghost` being undefined never surfaces: nothing was interpreted.
        assert!(!sink.had_runtime_error());
    }

    #[test]
    fn runtime_error_exits_70() {
        let (outcome, sink) = run("print -\"x\";");
        assert_eq!(outcome, RunOutcome::RuntimeError);
        assert_eq!(outcome.exit_code(), 70);
        assert!(sink.had_runtime_error());
        assert_eq!(sink.diagnostics()[0].message, "Operand must be a number.");
    }

    #[test]
    fn scanner_errors_also_exit_65() {
        let (outcome, sink) = run("print @;");
        assert_eq!(outcome, RunOutcome::SyntaxError);
        assert_eq!(sink.diagnostics()[0].message, "Unexpected character.");
    }

    #[test]
    fn environment_survives_failed_lines() {
        let mut interpreter = Interpreter::with_printer(PrintHandler::buffer());
        let mut sink = DiagnosticSink::new();

        run_source("var x = 1;", &mut interpreter, &mut sink);
        sink.reset();

        let outcome = run_source("x +", &mut interpreter, &mut sink);
        assert_eq!(outcome, RunOutcome::SyntaxError);
        sink.reset();

        let outcome = run_source("print x;", &mut interpreter, &mut sink);
        assert_eq!(outcome, RunOutcome::Success);
        assert_eq!(
            interpreter.environment().get("x"),
            Some(Value::Number(1.0))
        );
    }
}

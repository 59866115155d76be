//! Diagnostic system for error reporting.
//!
//! The model is deliberately small:
//! - Clear messages (what went wrong)
//! - A line number and span (where it went wrong)
//! - A context label (` at 'x'` / ` at end`) tying the message to a token
//!
//! Library crates never print: the scanner, parser, and evaluator report
//! into a [`DiagnosticSink`], and the CLI decides when and how to render the
//! collected diagnostics through an emitter. The sink tracks syntax and
//! runtime errors separately because they drive different exit codes.

mod diagnostic;
pub mod emitter;
mod sink;

pub use diagnostic::{
    parse_error, runtime_error, unexpected_character, unterminated_string, Diagnostic,
    DiagnosticKind, Severity,
};
pub use emitter::{ColorMode, TerminalEmitter};
pub use sink::DiagnosticSink;

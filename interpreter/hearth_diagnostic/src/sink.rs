//! Collecting sink for diagnostics.

use crate::{Diagnostic, DiagnosticKind, Severity};

/// Accumulates diagnostics across a scan/parse/interpret run.
///
/// Owned by the driver and passed `&mut` into each pipeline stage. Tracks
/// syntax and runtime errors separately: any syntax error means the program
/// must not be interpreted, and the two kinds map to different process exit
/// codes. `reset` clears everything between REPL lines.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
    had_syntax_error: bool,
    had_runtime_error: bool,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        DiagnosticSink::default()
    }

    /// Record a diagnostic, updating the per-kind error flags.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity == Severity::Error {
            match diagnostic.kind {
                DiagnosticKind::Syntax => self.had_syntax_error = true,
                DiagnosticKind::Runtime => self.had_runtime_error = true,
            }
        }
        self.diagnostics.push(diagnostic);
    }

    /// Whether any scanner or parser error was reported.
    #[inline]
    pub fn had_syntax_error(&self) -> bool {
        self.had_syntax_error
    }

    /// Whether a runtime error was reported.
    #[inline]
    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    #[inline]
    pub fn had_error(&self) -> bool {
        self.had_syntax_error || self.had_runtime_error
    }

    /// Collected diagnostics in report order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Drain the collected diagnostics, leaving the flags intact.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Clear all diagnostics and flags. Used between REPL lines so one bad
    /// line does not poison the next.
    pub fn reset(&mut self) {
        self.diagnostics.clear();
        self.had_syntax_error = false;
        self.had_runtime_error = false;
    }
}

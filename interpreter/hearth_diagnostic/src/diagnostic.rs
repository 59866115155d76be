//! Diagnostic type and factory functions.
//!
//! Factories centralize the exact error wording so the scanner, parser, and
//! evaluator all report through the same vocabulary. Message text is part of
//! the observable behavior (tests assert on it), so changes here are
//! user-visible.

use hearth_ir::{Span, Token, TokenKind};

/// How serious a diagnostic is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Header text as rendered by the emitter.
    pub fn header(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        }
    }
}

/// Which phase produced a diagnostic.
///
/// Syntax errors (scanning and parsing) are recoverable and many may be
/// collected per run; a runtime error terminates the run. The two kinds
/// drive different process exit codes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    Syntax,
    Runtime,
}

/// A single reported problem.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub message: String,
    /// 1-based source line.
    pub line: u32,
    pub span: Span,
    /// Token context rendered as ` at <context>` after `Error`, e.g. `'x'`
    /// or `end`. `None` for scanner errors, which have no token yet.
    pub context: Option<String>,
}

impl Diagnostic {
    /// Create a syntax error with no token context.
    pub fn syntax(line: u32, span: Span, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            kind: DiagnosticKind::Syntax,
            message: message.into(),
            line,
            span,
            context: None,
        }
    }

    /// Create a runtime error attributed to a token.
    pub fn runtime(token: &Token, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            kind: DiagnosticKind::Runtime,
            message: message.into(),
            line: token.line,
            span: token.span,
            context: Some(token_context(token)),
        }
    }

    /// Attach a token context label.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Context label for a token: `end` for the end-of-input marker, the quoted
/// lexeme otherwise.
fn token_context(token: &Token) -> String {
    if token.kind == TokenKind::Eof {
        "end".to_string()
    } else {
        format!("'{}'", token.lexeme)
    }
}

/// Scanner: an unrecognized character.
pub fn unexpected_character(line: u32, span: Span) -> Diagnostic {
    Diagnostic::syntax(line, span, "Unexpected character.")
}

/// Scanner: a string literal with no closing quote before end of input.
pub fn unterminated_string(line: u32, span: Span) -> Diagnostic {
    Diagnostic::syntax(line, span, "Unterminated string.")
}

/// Parser: a recoverable grammar violation at `token`.
pub fn parse_error(token: &Token, message: impl Into<String>) -> Diagnostic {
    Diagnostic::syntax(token.line, token.span, message).with_context(token_context(token))
}

/// Evaluator: a type error or unbound variable at `token`.
pub fn runtime_error(token: &Token, message: impl Into<String>) -> Diagnostic {
    Diagnostic::runtime(token, message)
}

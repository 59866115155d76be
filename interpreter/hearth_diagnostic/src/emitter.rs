//! Terminal emitter.
//!
//! Human-readable diagnostic output with optional ANSI color support. The
//! header line follows the classic interpreter format:
//!
//! ```text
//! [line 2] Error at '+': Operands must be numbers.
//! ```
//!
//! When constructed with the program source, the emitter also renders the
//! offending line with a caret under the diagnostic's span.

use std::io::{self, Write};

use crate::{Diagnostic, Severity};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. For `Auto`, `is_tty` decides; `Always` and
    /// `Never` ignore it.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color and source-snippet support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<String>,
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer: io::stderr(),
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the program source, enabling caret snippets under each
    /// diagnostic.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Render a single diagnostic.
    pub fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_header(diagnostic);
        match &diagnostic.context {
            Some(context) => {
                let _ = writeln!(self.writer, " at {context}: {}", diagnostic.message);
            }
            None => {
                let _ = writeln!(self.writer, ": {}", diagnostic.message);
            }
        }
        self.write_snippet(diagnostic);
    }

    /// Render every diagnostic in order.
    pub fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
        }
    }

    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn write_header(&mut self, diagnostic: &Diagnostic) {
        let _ = write!(self.writer, "[line {}] ", diagnostic.line);
        let header = diagnostic.severity.header();
        if self.colors {
            let color = match diagnostic.severity {
                Severity::Error => colors::ERROR,
                Severity::Warning => colors::WARNING,
            };
            let _ = write!(self.writer, "{color}{header}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{header}");
        }
    }

    /// Render the source line with a caret under the span, when the source
    /// is available and the span falls inside it.
    fn write_snippet(&mut self, diagnostic: &Diagnostic) {
        let Some(source) = &self.source else {
            return;
        };
        let start = diagnostic.span.start as usize;
        if start > source.len() {
            return;
        }

        let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[start..]
            .find('\n')
            .map_or(source.len(), |i| start + i);
        let line_text = &source[line_start..line_end];

        let gutter = format!("{:>4} | ", diagnostic.line);
        let column = start - line_start;
        // At least one caret, never running past the end of the line.
        let remaining = line_text.len().saturating_sub(column).max(1);
        let width = (diagnostic.span.len() as usize).max(1).min(remaining);
        let caret = format!("{}{}", " ".repeat(column), "^".repeat(width));

        if self.colors {
            let _ = writeln!(
                self.writer,
                "{}{gutter}{}{line_text}",
                colors::BOLD,
                colors::RESET
            );
            let _ = writeln!(
                self.writer,
                "{:>width$}{}{caret}{}",
                "",
                colors::ERROR,
                colors::RESET,
                width = gutter.len()
            );
        } else {
            let _ = writeln!(self.writer, "{gutter}{line_text}");
            let _ = writeln!(self.writer, "{:>width$}{caret}", "", width = gutter.len());
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use hearth_ir::{Span, Token, TokenKind};

    use super::*;
    use crate::{parse_error, unexpected_character};

    fn render(diagnostic: &Diagnostic, source: Option<&str>) -> String {
        let mut output = Vec::new();
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
        if let Some(source) = source {
            emitter = emitter.with_source(source);
        }
        emitter.emit(diagnostic);
        emitter.flush();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn scanner_error_has_no_context() {
        let diag = unexpected_character(1, Span::new(0, 1));
        assert_eq!(render(&diag, None), "[line 1] Error: Unexpected character.\n");
    }

    #[test]
    fn parse_error_includes_lexeme_context() {
        let mut token = Token::dummy(TokenKind::Semicolon, ";");
        token.line = 2;
        let diag = parse_error(&token, "Expect expression.");
        assert_eq!(
            render(&diag, None),
            "[line 2] Error at ';': Expect expression.\n"
        );
    }

    #[test]
    fn snippet_points_at_span() {
        let source = "var x = 1;\nprint y;\n";
        // `y` sits at byte 17 on line 2.
        let token = Token::new(TokenKind::Identifier, "y", None, 2, Span::new(17, 18));
        let diag = crate::runtime_error(&token, "Undefined variable 'y'.");
        let text = render(&diag, Some(source));
        assert!(text.contains("[line 2] Error at 'y': Undefined variable 'y'."));
        assert!(text.contains("print y;"));
        let caret_line = text.lines().last().unwrap();
        assert_eq!(caret_line.find('^'), Some("   2 | ".len() + 6));
    }

    #[test]
    fn colors_wrap_the_header() {
        let diag = unexpected_character(1, Span::new(0, 1));
        let mut output = Vec::new();
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Always, false);
        emitter.emit(&diag);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\x1b[1;31mError\x1b[0m"));
    }

    #[test]
    fn color_mode_resolution() {
        assert!(ColorMode::Auto.should_use_colors(true));
        assert!(!ColorMode::Auto.should_use_colors(false));
        assert!(ColorMode::Always.should_use_colors(false));
        assert!(!ColorMode::Never.should_use_colors(true));
    }

    #[test]
    fn out_of_range_span_skips_snippet() {
        let diag = unexpected_character(9, Span::new(500, 501));
        let text = render(&diag, Some("short"));
        assert_eq!(text, "[line 9] Error: Unexpected character.\n");
    }
}

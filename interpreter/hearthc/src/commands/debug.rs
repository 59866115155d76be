//! `hearth lex` and `hearth parse`: pipeline inspection commands.

use hearth_diagnostic::DiagnosticSink;
use hearth_ir::pretty::render_stmt;

use super::{read_file, report_errors};

/// Print the token stream, one token per line.
pub fn lex_file(path: &str) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(code) => return code,
    };

    let mut sink = DiagnosticSink::new();
    let tokens = hearth_lexer::scan(&source, &mut sink);
    for token in &tokens {
        println!("{token:?}");
    }

    report_errors(&sink, &source);
    if sink.had_syntax_error() {
        65
    } else {
        0
    }
}

/// Print each parsed statement in parenthesized prefix form.
pub fn parse_file(path: &str) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(code) => return code,
    };

    let mut sink = DiagnosticSink::new();
    let tokens = hearth_lexer::scan(&source, &mut sink);
    let statements = hearth_parse::parse(tokens, &mut sink);
    for statement in &statements {
        println!("{}", render_stmt(statement));
    }

    report_errors(&sink, &source);
    if sink.had_syntax_error() {
        65
    } else {
        0
    }
}

//! Property tests: the scanner must survive arbitrary input.

use hearth_diagnostic::DiagnosticSink;
use hearth_ir::TokenKind;
use hearth_lexer::scan;
use proptest::prelude::*;

proptest! {
    /// Scanning any string terminates without panicking and always produces
    /// exactly one trailing `Eof`.
    #[test]
    fn scan_never_panics_and_ends_with_eof(source in ".*") {
        let mut sink = DiagnosticSink::new();
        let tokens = scan(&source, &mut sink);

        let eof_count = tokens.iter().filter(|t| t.is_eof()).count();
        prop_assert_eq!(eof_count, 1);
        prop_assert!(tokens.last().is_some_and(|t| t.is_eof()));
    }

    /// Every non-Eof token's lexeme is a verbatim slice of the source.
    #[test]
    fn lexemes_slice_the_source(source in "[ -~\n]*") {
        let mut sink = DiagnosticSink::new();
        let tokens = scan(&source, &mut sink);

        for token in &tokens {
            if token.kind == TokenKind::Eof {
                continue;
            }
            prop_assert_eq!(
                &source[token.span.to_range()],
                token.lexeme.as_str()
            );
        }
    }

    /// Line numbers never decrease along the stream.
    #[test]
    fn line_numbers_are_monotonic(source in "[ -~\n]*") {
        let mut sink = DiagnosticSink::new();
        let tokens = scan(&source, &mut sink);

        for pair in tokens.windows(2) {
            prop_assert!(pair[0].line <= pair[1].line);
        }
    }
}

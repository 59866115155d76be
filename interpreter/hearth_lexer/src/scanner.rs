//! The scanner proper: one pass, maximal munch, error-and-continue.

use hearth_diagnostic::{unexpected_character, unterminated_string, DiagnosticSink};
use hearth_ir::{Span, Token, TokenKind};
use memchr::memchr_iter;

use crate::cursor::Cursor;
use crate::keywords;

/// Scan `source` into a token stream.
///
/// Lexical errors are reported into `sink`; the affected characters are
/// skipped and scanning continues, so the returned stream covers the whole
/// input. The stream always ends with exactly one `Eof` token carrying the
/// final line number.
pub fn scan(source: &str, sink: &mut DiagnosticSink) -> Vec<Token> {
    let mut scanner = Scanner {
        source,
        cursor: Cursor::new(source),
        line: 1,
        tokens: Vec::new(),
    };
    scanner.run(sink);
    scanner.tokens
}

struct Scanner<'a> {
    source: &'a str,
    cursor: Cursor<'a>,
    /// 1-based, incremented on every newline, including inside strings.
    line: u32,
    tokens: Vec<Token>,
}

impl Scanner<'_> {
    fn run(&mut self, sink: &mut DiagnosticSink) {
        while !self.cursor.is_at_end() {
            self.scan_token(sink);
        }
        let end = self.source.len() as u32;
        self.tokens
            .push(Token::new(TokenKind::Eof, "", None, self.line, Span::point(end)));
    }

    fn scan_token(&mut self, sink: &mut DiagnosticSink) {
        let start = self.cursor.pos();
        let Some(byte) = self.cursor.advance() else {
            return;
        };
        match byte {
            b'(' => self.push(TokenKind::LeftParen, start),
            b')' => self.push(TokenKind::RightParen, start),
            b'{' => self.push(TokenKind::LeftBrace, start),
            b'}' => self.push(TokenKind::RightBrace, start),
            b',' => self.push(TokenKind::Comma, start),
            b'.' => self.push(TokenKind::Dot, start),
            b'-' => self.push(TokenKind::Minus, start),
            b'+' => self.push(TokenKind::Plus, start),
            b';' => self.push(TokenKind::Semicolon, start),
            b'*' => self.push(TokenKind::Star, start),

            // One or two character operators: maximal munch on `=`.
            b'!' => {
                let kind = if self.cursor.match_byte(b'=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.push(kind, start);
            }
            b'=' => {
                let kind = if self.cursor.match_byte(b'=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.push(kind, start);
            }
            b'<' => {
                let kind = if self.cursor.match_byte(b'=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.push(kind, start);
            }
            b'>' => {
                let kind = if self.cursor.match_byte(b'=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.push(kind, start);
            }

            // Slash or line comment.
            b'/' => {
                if self.cursor.match_byte(b'/') {
                    self.cursor.skip_to_line_end();
                } else {
                    self.push(TokenKind::Slash, start);
                }
            }

            b' ' | b'\r' | b'\t' => {}
            b'\n' => self.line += 1,

            b'"' => self.string(start, sink),
            b'0'..=b'9' => self.number(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),

            _ => {
                // Consume UTF-8 continuation bytes so a multi-byte character
                // yields a single diagnostic.
                if byte >= 0x80 {
                    self.cursor.eat_while(|b| (0x80..0xC0).contains(&b));
                }
                sink.report(unexpected_character(
                    self.line,
                    Span::new(start as u32, self.cursor.pos() as u32),
                ));
            }
        }
    }

    /// Scan a `"`-delimited string; the opening quote is already consumed.
    ///
    /// Strings may span newlines. The token's line is the line of the
    /// closing quote, the line counter having advanced through the contents.
    fn string(&mut self, start: usize, sink: &mut DiagnosticSink) {
        match self.cursor.find(b'"') {
            Some(quote) => {
                let contents = &self.source[start + 1..quote];
                self.line += memchr_iter(b'\n', contents.as_bytes()).count() as u32;
                self.cursor.jump_to(quote + 1);
                let span = Span::new(start as u32, self.cursor.pos() as u32);
                self.tokens.push(Token::new(
                    TokenKind::Str,
                    &self.source[start..=quote],
                    Some(contents.to_string()),
                    self.line,
                    span,
                ));
            }
            None => {
                let rest = &self.source.as_bytes()[self.cursor.pos()..];
                self.line += memchr_iter(b'\n', rest).count() as u32;
                self.cursor.jump_to_end();
                sink.report(unterminated_string(
                    self.line,
                    Span::new(start as u32, self.cursor.pos() as u32),
                ));
            }
        }
    }

    /// Scan a number: digits with an optional fractional part. No leading
    /// dot, no exponent; a trailing `.` belongs to the next token.
    fn number(&mut self, start: usize) {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.peek() == Some(b'.')
            && self.cursor.peek_next().is_some_and(|b| b.is_ascii_digit())
        {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        let text = &self.source[start..self.cursor.pos()];
        let span = Span::new(start as u32, self.cursor.pos() as u32);
        self.tokens.push(Token::new(
            TokenKind::Number,
            text,
            Some(text.to_string()),
            self.line,
            span,
        ));
    }

    /// Scan an identifier run, then check the keyword table.
    fn identifier(&mut self, start: usize) {
        self.cursor
            .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        let text = &self.source[start..self.cursor.pos()];
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Identifier);
        self.push(kind, start);
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        let span = Span::new(start as u32, self.cursor.pos() as u32);
        self.tokens.push(Token::new(
            kind,
            &self.source[start..self.cursor.pos()],
            None,
            self.line,
            span,
        ));
    }
}

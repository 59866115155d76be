//! Token types for the Hearth scanner.
//!
//! `TokenKind` is a closed, field-less enumeration: the parser's match logic
//! and its `u64` token bitsets both assume the set is exhaustive and that
//! every discriminant fits in `0..64`. Literal payloads live on the `Token`
//! itself (`lexeme` / `literal`), not in the kind.

use std::fmt;

use crate::Span;

/// Number of [`TokenKind`] variants. Used for bitset sizing and test verification.
pub const TOKEN_KIND_COUNT: usize = 39;

/// Kind of a scanned token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    Str,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    // End of input
    Eof,
}

impl TokenKind {
    /// Dense discriminant index for bitset membership testing.
    ///
    /// Invariant: every index is `< 64` so a `u64` bitset covers the
    /// whole enumeration.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }
}

// Compile-time guard: the parser's TokenSet is a u64 bitset, so the
// highest discriminant must stay below 64.
const _: () = assert!(TokenKind::Eof as u8 == (TOKEN_KIND_COUNT - 1) as u8);
const _: () = assert!((TokenKind::Eof as u8) < 64);

/// A scanned token.
///
/// Created once by the scanner, consumed read-only by the parser and
/// carried into the AST for diagnostic attribution; never mutated.
///
/// `literal` is the raw text payload: the verbatim digit substring for
/// [`TokenKind::Number`] (numeric conversion happens in the parser), the
/// contents between the quotes for [`TokenKind::Str`], and `None` for
/// everything else.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<String>,
    /// 1-based source line, used for diagnostics only.
    pub line: u32,
    pub span: Span,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<String>,
        line: u32,
        span: Span,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
            span,
        }
    }

    /// Create a dummy token for testing/synthesized nodes.
    pub fn dummy(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line: 1,
            span: Span::DUMMY,
        }
    }

    /// Whether this is the end-of-input marker.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(lit) => write!(
                f,
                "{:?} '{}' ({}) @ line {}",
                self.kind, self.lexeme, lit, self.line
            ),
            None => write!(f, "{:?} '{}' @ line {}", self.kind, self.lexeme, self.line),
        }
    }
}

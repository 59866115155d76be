//! Cursor over the scanned token stream.

use hearth_ir::{Token, TokenKind};

use crate::recovery::TokenSet;

/// Forward-only cursor with single-token lookahead.
///
/// The stream is normalized to end with `Eof` on construction: `peek` never
/// runs past it, so no method here can fail.
#[derive(Debug)]
pub(crate) struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    pub(crate) fn new(mut tokens: Vec<Token>) -> Self {
        // The scanner always appends Eof; this covers hand-built streams.
        if !tokens.last().is_some_and(Token::is_eof) {
            tokens.push(Token::dummy(TokenKind::Eof, ""));
        }
        Cursor { tokens, pos: 0 }
    }

    /// Current token without consuming it.
    #[inline]
    pub(crate) fn peek(&self) -> &Token {
        // The Eof terminator makes this index always valid.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Most recently consumed token.
    #[inline]
    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    /// Consume the current token and return it. Stalls at `Eof`.
    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.previous()
    }

    /// Whether the current token has the given kind.
    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consume the current token if it has the given kind.
    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token if its kind is in `set`.
    pub(crate) fn match_set(&mut self, set: TokenSet) -> bool {
        if set.contains(self.peek().kind) {
            self.advance();
            true
        } else {
            false
        }
    }
}

//! Byte cursor over source text.
//!
//! The cursor advances through the source byte-by-byte; multi-byte skips
//! (comment bodies, string contents) use `memchr` instead of a scalar loop.
//! Positions are byte offsets, so they slice the original `&str` directly
//! when the scanner builds lexemes.

use memchr::memchr;

/// Read-only byte cursor with one byte of lookahead beyond the current one.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor {
            src: source.as_bytes(),
            pos: 0,
        }
    }

    /// Current byte offset.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Byte at the current position, `None` at end of input.
    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    /// Byte one past the current position.
    #[inline]
    pub(crate) fn peek_next(&self) -> Option<u8> {
        self.src.get(self.pos + 1).copied()
    }

    /// Consume and return the current byte.
    #[inline]
    pub(crate) fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    /// Consume the current byte only if it equals `expected`.
    #[inline]
    pub(crate) fn match_byte(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume bytes while `pred` holds.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(byte) = self.peek() {
            if !pred(byte) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Skip to the next newline without consuming it, or to end of input.
    /// Used for `//` comment bodies.
    pub(crate) fn skip_to_line_end(&mut self) {
        match memchr(b'\n', &self.src[self.pos..]) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.src.len(),
        }
    }

    /// Absolute offset of the next occurrence of `needle` at or after the
    /// current position.
    pub(crate) fn find(&self, needle: u8) -> Option<usize> {
        memchr(needle, &self.src[self.pos..]).map(|offset| self.pos + offset)
    }

    /// Jump to an absolute offset. Caller guarantees `pos <= len`.
    #[inline]
    pub(crate) fn jump_to(&mut self, pos: usize) {
        debug_assert!(pos <= self.src.len());
        self.pos = pos;
    }

    /// Jump past the end of input.
    #[inline]
    pub(crate) fn jump_to_end(&mut self) {
        self.pos = self.src.len();
    }
}

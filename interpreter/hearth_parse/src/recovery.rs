//! Error recovery support.
//!
//! Statement-boundary detection for panic-mode synchronization uses
//! bitset-based O(1) membership testing.

use hearth_ir::TokenKind;

// TokenSet is a u64 bitset, so all discriminant indices must fit in 0..64.
const _: () = assert!(hearth_ir::TOKEN_KIND_COUNT <= 64);

/// A set of token kinds using bitset representation for O(1) membership
/// testing. Each bit in the `u64` corresponds to a `TokenKind` discriminant
/// index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        TokenSet(0)
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        TokenSet(self.0 | (1u64 << kind.discriminant_index()))
    }

    /// Union of two token sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        TokenSet(self.0 | other.0)
    }

    /// Check if this set contains a token kind.
    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }

    /// Number of token kinds in this set.
    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }
}

/// Tokens that begin a statement or declaration. Synchronization stops when
/// the next token is one of these (or just after a `;`).
pub(crate) const STATEMENT_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Fun)
    .with(TokenKind::Var)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Print)
    .with(TokenKind::Return);

//! Token model tying a `TokenKind` to its source text and span.
//!
//! Tokens are what the editing surface paints. Offsets let the surface map a
//! token back onto its document without re-scanning, and keeping the text
//! alongside makes tokens self-contained once handed over.
use crate::sql::token_kind::TokenKind;

/// A classified lexeme with its inclusive start and exclusive end byte offsets.
///
/// Invariants:
/// - `end >= start`
/// - `text == source[start..end]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            start,
            end,
        }
    }

    /// Byte length of this token (`end - start`).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the cursor (byte offset) lies within this token's span.
    ///
    /// NOTE: End is exclusive, so `cursor == end` returns false.
    pub fn contains(&self, cursor: usize) -> bool {
        cursor >= self.start && cursor < self.end
    }

    pub const fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

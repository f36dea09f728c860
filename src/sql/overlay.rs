use crate::*;
use crate::sql::{
    grammar::{TokenClassifier, unquote},
    token_kind::TokenKind,
};

/// Decorates a base classifier so identifiers naming an open sheet or one of
/// its columns come out as `TokenKind::Variable`.
///
/// The overlay owns its `IdentifierSet`. Replacing it swaps the whole value, so
/// a classification never sees a mix of the previous and the next set.
#[derive(Debug, Clone)]
pub struct IdentifierOverlay<C> {
    base: C,
    identifiers: IdentifierSet,
}

impl<C: TokenClassifier> IdentifierOverlay<C> {
    pub fn new(base: C, identifiers: IdentifierSet) -> Self {
        Self { base, identifiers }
    }

    /// Replace the identifier set; returns the one it supersedes.
    pub fn set_identifier_set(&mut self, identifiers: IdentifierSet) -> IdentifierSet {
        debug!(count = identifiers.len(), "replacing identifier set");
        std::mem::replace(&mut self.identifiers, identifiers)
    }

    pub fn identifiers(&self) -> &IdentifierSet {
        &self.identifiers
    }

    pub fn base(&self) -> &C {
        &self.base
    }
}

impl<C: TokenClassifier> TokenClassifier for IdentifierOverlay<C> {
    fn classify(&self, text: &str) -> TokenKind {
        match self.base.classify(text) {
            TokenKind::Identifier if self.identifiers.contains(&unquote(text)) => {
                TokenKind::Variable
            }
            kind => kind,
        }
    }
}

use super::*;

/// The pluggable syntax definition an editor runs on: a base grammar with the
/// identifier overlay for highlighting and the completion merger for the popup.
///
/// `configure` swaps in a fresh overlay without touching the base grammar or
/// the surface the adapter is installed in.
#[derive(Debug, Clone)]
pub struct GrammarAdapter<G = SqlGrammar> {
    base: G,
    overlay: IdentifierOverlay<G>,
    merger: CompletionMerger<G>,
}

impl<G: BaseGrammar + Clone> GrammarAdapter<G> {
    pub fn new(base: G, identifiers: IdentifierSet) -> Self {
        Self {
            overlay: IdentifierOverlay::new(base.clone(), identifiers),
            merger: CompletionMerger::new(base.clone()),
            base,
        }
    }

    /// Replace the live classifier with one over `identifiers`.
    pub fn configure(&mut self, identifiers: IdentifierSet) {
        self.overlay = IdentifierOverlay::new(self.base.clone(), identifiers);
    }

    pub fn identifiers(&self) -> &IdentifierSet {
        self.overlay.identifiers()
    }

    pub fn classifier(&self) -> &IdentifierOverlay<G> {
        &self.overlay
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        tokenize(text, &self.overlay)
    }

    pub fn completions(&self, prefix: &str, context: &CompletionContext) -> Vec<CompletionItem> {
        self.merger
            .get_completions(self.overlay.identifiers(), prefix, context)
    }
}

impl Default for GrammarAdapter<SqlGrammar> {
    fn default() -> Self {
        Self::new(SqlGrammar, IdentifierSet::default())
    }
}

use super::*;
use std::cmp::Reverse;

/// Puts the open sheets' names in front of whatever the grammar proposes.
///
/// Holds no copy of the identifiers: the caller passes the live set on every
/// call, so completions can never lag behind a replacement.
#[derive(Debug, Clone)]
pub struct CompletionMerger<P> {
    base: P,
}

impl<P: CompletionProvider> CompletionMerger<P> {
    pub fn new(base: P) -> Self {
        Self { base }
    }

    /// Dynamic identifier items first, then the base provider's items for the
    /// same `prefix` and `context`.
    ///
    /// An identifier spelled like a keyword shows up twice, once per source.
    pub fn get_completions(
        &self,
        identifiers: &IdentifierSet,
        prefix: &str,
        context: &CompletionContext,
    ) -> Vec<CompletionItem> {
        merge_completions(
            dynamic_completions(identifiers),
            self.base.completions(prefix, context),
        )
    }
}

/// One item per identifier, score 1.
pub fn dynamic_completions(identifiers: &IdentifierSet) -> Vec<CompletionItem> {
    identifiers.iter().map(CompletionItem::from).collect()
}

pub fn merge_completions(
    mut dynamic: Vec<CompletionItem>,
    base: Vec<CompletionItem>,
) -> Vec<CompletionItem> {
    dynamic.extend(base);
    dynamic
}

/// Narrow merged completions to those matching the typed `prefix` (ASCII
/// case-insensitively), best score first. Ties keep their merged order.
pub fn rank(mut items: Vec<CompletionItem>, prefix: &str) -> Vec<CompletionItem> {
    let prefix = prefix.to_ascii_lowercase();
    items.retain(|item| item.value.to_ascii_lowercase().starts_with(&prefix));
    items.sort_by_key(|item| Reverse(item.score));
    items
}

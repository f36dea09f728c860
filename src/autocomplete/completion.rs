use super::*;

/// Where a completion came from; shown next to it in the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CompletionMeta {
    #[display("Sheet name")]
    Sheet,
    #[display("Column name")]
    Column,
    #[display("keyword")]
    Keyword,
    #[display("function")]
    Function,
    #[display("constant")]
    Constant,
    #[display("type")]
    DataType,
}

impl CompletionMeta {
    /// True for entries derived from the open sheets rather than the grammar.
    pub fn is_dynamic(self) -> bool {
        matches!(self, CompletionMeta::Sheet | CompletionMeta::Column)
    }
}

impl From<IdentifierKind> for CompletionMeta {
    fn from(kind: IdentifierKind) -> Self {
        match kind {
            IdentifierKind::Sheet => CompletionMeta::Sheet,
            IdentifierKind::Column => CompletionMeta::Column,
        }
    }
}

/// An autocomplete entry.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{value} ({meta})")]
pub struct CompletionItem {
    pub name: String,
    pub value: String,
    pub score: i32,
    pub meta: CompletionMeta,
}

impl CompletionItem {
    /// An item whose displayed name is the inserted value.
    pub fn new(value: impl Into<String>, score: i32, meta: CompletionMeta) -> Self {
        let value = value.into();
        Self {
            name: value.clone(),
            value,
            score,
            meta,
        }
    }
}

impl From<&Identifier> for CompletionItem {
    fn from(identifier: &Identifier) -> Self {
        CompletionItem::new(identifier.name.as_str(), 1, identifier.kind.into())
    }
}

/// Where in the document completion was requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionContext {
    /// Byte offset of the cursor.
    pub cursor: usize,
}

impl CompletionContext {
    pub fn at(cursor: usize) -> Self {
        Self { cursor }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_become_dynamic_items() {
        let item = CompletionItem::from(&Identifier::new("region", IdentifierKind::Column));
        assert_eq!(item.name, "region");
        assert_eq!(item.value, "region");
        assert_eq!(item.score, 1);
        assert_eq!(item.meta, CompletionMeta::Column);
        assert!(item.meta.is_dynamic());
        assert_eq!(item.to_string(), "region (Column name)");
    }

    #[test]
    fn grammar_meta_is_not_dynamic() {
        assert!(!CompletionMeta::Keyword.is_dynamic());
        assert_eq!(CompletionMeta::Sheet.to_string(), "Sheet name");
    }
}

//! The fixed base grammar every editor starts from.
//!
//! A grammar is two capabilities: classifying a lexeme and proposing
//! completions. They are separate traits so an overlay can decorate one
//! without caring about the other.
use crate::*;
use crate::sql::{
    keyword::{self, CONSTANTS, DATA_TYPES, FUNCTIONS, Keyword},
    token_kind::TokenKind,
    tokenizer::{SQLITE, closing_delimiter, is_operator_char},
};
use sqlparser::dialect::Dialect as _;
use std::borrow::Cow;

/// Classifies a single lexeme.
pub trait TokenClassifier {
    fn classify(&self, text: &str) -> TokenKind;
}

impl<F> TokenClassifier for F
where
    F: Fn(&str) -> TokenKind,
{
    fn classify(&self, text: &str) -> TokenKind {
        self(text)
    }
}

/// Supplies completions for the word being typed.
pub trait CompletionProvider {
    fn completions(&self, prefix: &str, context: &CompletionContext) -> Vec<CompletionItem>;
}

/// Both halves of a grammar; blanket-implemented.
pub trait BaseGrammar: TokenClassifier + CompletionProvider {}

impl<T: TokenClassifier + CompletionProvider> BaseGrammar for T {}

/// Lenient SQLite-flavoured SQL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SqlGrammar;

impl TokenClassifier for SqlGrammar {
    fn classify(&self, text: &str) -> TokenKind {
        let Some(first) = text.chars().next() else {
            return TokenKind::Other;
        };

        if text.starts_with("--") || text.starts_with("/*") {
            TokenKind::Comment
        } else if first == '\'' || first.is_ascii_digit() {
            TokenKind::Literal
        } else if SQLITE.is_delimited_identifier_start(first) {
            TokenKind::Identifier
        } else if SQLITE.is_identifier_start(first) {
            let lower = text.to_ascii_lowercase();
            if keyword::is_reserved(&lower) {
                TokenKind::Keyword
            } else if FUNCTIONS.contains(&lower.as_str()) {
                TokenKind::Function
            } else if CONSTANTS.contains(&lower.as_str()) {
                TokenKind::Literal
            } else {
                TokenKind::Identifier
            }
        } else if is_operator_char(first) {
            TokenKind::Operator
        } else {
            TokenKind::Other
        }
    }
}

impl CompletionProvider for SqlGrammar {
    /// The whole vocabulary, unfiltered: narrowing by prefix is the popup's job
    /// (see `rank`).
    fn completions(&self, _prefix: &str, _context: &CompletionContext) -> Vec<CompletionItem> {
        let words = Keyword::ALL
            .iter()
            .map(|k| (k.as_str(), CompletionMeta::Keyword))
            .chain(FUNCTIONS.iter().map(|f| (*f, CompletionMeta::Function)))
            .chain(CONSTANTS.iter().map(|c| (*c, CompletionMeta::Constant)))
            .chain(DATA_TYPES.iter().map(|t| (*t, CompletionMeta::DataType)));
        words
            .map(|(word, meta)| CompletionItem::new(word, 0, meta))
            .collect()
    }
}

/// Strip the delimiters from a quoted identifier and collapse doubled closing
/// delimiters (`"a""b"` is `a"b`); other text is returned as is.
pub fn unquote(text: &str) -> Cow<'_, str> {
    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open), Some(close))
            if SQLITE.is_delimited_identifier_start(open) && close == closing_delimiter(open) =>
        {
            let inner = chars.as_str();
            if inner.contains(close) {
                let single = close.to_string();
                Cow::Owned(inner.replace(&single.repeat(2), &single))
            } else {
                Cow::Borrowed(inner)
            }
        }
        _ => Cow::Borrowed(text),
    }
}

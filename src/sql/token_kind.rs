//! Token kind definitions for the query editor's highlighter.
//!
//! Every lexeme the tokenizer finds ends up in exactly one `TokenKind`. The
//! base grammar never produces `Variable`; that kind is reserved for the
//! identifier overlay, which promotes plain identifiers naming an open sheet
//! or one of its columns.
//!
//! See `keyword.rs` for the reserved words and `tokenizer.rs` for tokenization.

/// Classification for a token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TokenKind {
    /// Reserved word or data type name.
    #[display("keyword")]
    Keyword,
    /// Builtin function name.
    #[display("function")]
    Function,
    /// Identifier naming a sheet or column currently open.
    #[display("variable")]
    Variable,
    /// Any other identifier.
    #[display("identifier")]
    Identifier,
    /// String, number or boolean constant.
    #[display("literal")]
    Literal,
    #[display("comment")]
    Comment,
    #[display("operator")]
    Operator,
    /// Punctuation and anything unrecognized.
    #[display("other")]
    Other,
}

impl TokenKind {
    /// True when the kind comes from the grammar's fixed rules and must never be
    /// reinterpreted by an identifier overlay.
    pub fn is_reserved(self) -> bool {
        !matches!(self, TokenKind::Identifier | TokenKind::Variable)
    }

    /// Highlight scope handed to the editing surface's theme.
    pub const fn scope(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Function => "support.function",
            TokenKind::Variable => "variable",
            TokenKind::Identifier => "identifier",
            TokenKind::Literal => "constant",
            TokenKind::Comment => "comment",
            TokenKind::Operator => "keyword.operator",
            TokenKind::Other => "text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_kinds() {
        assert!(TokenKind::Keyword.is_reserved());
        assert!(TokenKind::Literal.is_reserved());
        assert!(TokenKind::Comment.is_reserved());
        assert!(!TokenKind::Identifier.is_reserved());
        assert!(!TokenKind::Variable.is_reserved());
    }

    #[test]
    fn variable_has_its_own_scope() {
        assert_eq!(TokenKind::Variable.scope(), "variable");
        assert_ne!(TokenKind::Variable.scope(), TokenKind::Identifier.scope());
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(TokenKind::Variable.to_string(), "variable");
        assert_eq!(TokenKind::Operator.to_string(), "operator");
    }
}

//! Lenient SQL tokenization and classification for the query editor.
//!
//! Everything here runs on each keystroke against half-written queries, so
//! nothing in this module ever fails: unknown input simply becomes
//! `TokenKind::Other`, and unterminated strings or comments extend to the end
//! of the text.
//!
//! Modules:
//! - `keyword`    : Reserved words, data types, builtin functions and constants.
//! - `token_kind` : Classification of lexical atoms.
//! - `token`      : Token struct pairing a `TokenKind` with its text and span.
//! - `tokenizer`  : Single pass O(n) lexer plus `tokenize`, which classifies lexemes.
//! - `grammar`    : The classifier/completion traits and the base `SqlGrammar`.
//! - `overlay`    : `IdentifierOverlay`, promoting sheet and column names to variables.
//!
//! NOTE: This is **not** a SQL parser. Queries are validated by the engine that
//! runs them.

pub mod grammar;
pub mod keyword;
pub mod overlay;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use grammar::{BaseGrammar, CompletionProvider, SqlGrammar, TokenClassifier, unquote};
pub use keyword::Keyword;
pub use overlay::IdentifierOverlay;
pub use token::Token;
pub use token_kind::TokenKind;
pub use tokenizer::{lexemes, tokenize};

/// Convenience prelude re‑exporting the most commonly used items.
pub mod prelude {
    pub use super::{
        IdentifierOverlay, Keyword, SqlGrammar, Token, TokenClassifier, TokenKind, tokenize,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_with_base_grammar() {
        let tokens = tokenize("SELECT col FROM tbl", &SqlGrammar);
        assert_eq!(tokens.len(), 4);
        assert!(
            tokens
                .iter()
                .filter(|t| t.kind == TokenKind::Keyword)
                .map(|t| t.text.as_str())
                .eq(["SELECT", "FROM"])
        );
        assert!(tokens.iter().any(|t| t.text == "tbl" && t.kind == TokenKind::Identifier));
    }

    #[test]
    fn prelude_import_works() {
        use super::prelude::*;
        let toks = tokenize("FROM X", &SqlGrammar);
        assert_eq!(toks[0].kind, TokenKind::Keyword);
        assert_eq!(toks[1].kind, TokenKind::Identifier);
    }
}

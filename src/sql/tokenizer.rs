use crate::*;
use crate::sql::{grammar::TokenClassifier, token::Token};
use sqlparser::dialect::{Dialect as _, SQLiteDialect};
use std::{iter::Peekable, ops::Range, str::CharIndices};

/// Sheets are queried through SQLite, so identifier characters follow its rules.
pub(crate) static SQLITE: SQLiteDialect = SQLiteDialect {};

const OPERATOR_CHARS: &[char] = &['=', '<', '>', '!', '+', '-', '*', '/', '%', '|', '&', '~', '^'];

pub(crate) fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(&c)
}

/// Closing delimiter for a delimited identifier opened by `open`.
pub(crate) fn closing_delimiter(open: char) -> char {
    match open {
        '[' => ']',
        other => other,
    }
}

/// Lenient lexer splitting a query into lexeme byte ranges.
///
/// Scope / Intent:
/// - Runs on every keystroke, so it accepts anything: half-typed strings and
///   comments simply extend to the end of the text.
/// - Only finds boundaries. Deciding what a lexeme *is* belongs to the
///   classifier, which lets the identifier overlay reuse the same lexemes.
///
/// Behavior:
/// - Skips whitespace.
/// - `--` comments run to the end of the line, `/* */` comments to their
///   terminator.
/// - `'...'` strings and `"..."` / `` `...` `` / `[...]` identifiers honor
///   doubled closing quotes.
/// - Numbers (exponent signs included) and identifier words are aggregated;
///   operator characters form runs that stop where a comment opens; everything
///   else is a single-character lexeme.
///
/// Complexity:
/// - O(n) time, O(t) space where `t` is number of lexemes.
pub fn lexemes(sql: &str) -> Vec<Range<usize>> {
    let len = sql.len();
    let mut out = Vec::new();
    let mut chars = sql.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }

        let end = match c {
            '-' if next_is(&mut chars, '-') => eat_while(&mut chars, len, |c| c != '\n'),
            '/' if next_is(&mut chars, '*') => eat_block_comment(&mut chars, len),
            '\'' => eat_quoted(&mut chars, len, '\''),
            c if SQLITE.is_delimited_identifier_start(c) => {
                eat_quoted(&mut chars, len, closing_delimiter(c))
            }
            c if c.is_ascii_digit() => eat_number(&mut chars, sql, c),
            c if SQLITE.is_identifier_start(c) => {
                eat_while(&mut chars, len, |c| SQLITE.is_identifier_part(c))
            }
            c if is_operator_char(c) => eat_operator(&mut chars, sql),
            c => start + c.len_utf8(),
        };
        out.push(start..end);
    }

    out
}

/// Tokenize `sql`, classifying every lexeme with `classifier`.
///
/// Never fails: malformed constructs still yield tokens.
pub fn tokenize(sql: &str, classifier: &impl TokenClassifier) -> Vec<Token> {
    lexemes(sql)
        .into_iter()
        .map(|range| {
            let text = &sql[range.clone()];
            let kind = classifier.classify(text);
            trace!("{text:?} -> {kind}");
            Token::new(kind, text, range.start, range.end)
        })
        .collect()
}

fn next_is(chars: &mut Peekable<CharIndices<'_>>, expected: char) -> bool {
    chars.peek().is_some_and(|&(_, c)| c == expected)
}

/// Consume characters while `pred` holds; returns the end offset reached.
fn eat_while(
    chars: &mut Peekable<CharIndices<'_>>,
    len: usize,
    pred: impl Fn(char) -> bool,
) -> usize {
    while let Some(&(_, c)) = chars.peek() {
        if !pred(c) {
            break;
        }
        chars.next();
    }
    chars.peek().map_or(len, |&(i, _)| i)
}

/// Digits, letters, `.` and `_`, plus the sign of an exponent as in `1e-5`.
fn eat_number(chars: &mut Peekable<CharIndices<'_>>, sql: &str, first: char) -> usize {
    let mut prev = first;
    while let Some(&(i, c)) = chars.peek() {
        let exponent_sign = matches!(c, '+' | '-')
            && matches!(prev, 'e' | 'E')
            && sql[i + 1..].starts_with(|d: char| d.is_ascii_digit());
        if !(c.is_ascii_alphanumeric() || c == '.' || c == '_' || exponent_sign) {
            break;
        }
        prev = c;
        chars.next();
    }
    chars.peek().map_or(sql.len(), |&(i, _)| i)
}

/// An operator run, ending before any `--` or `/*` so the comment lexes on its own.
fn eat_operator(chars: &mut Peekable<CharIndices<'_>>, sql: &str) -> usize {
    while let Some(&(i, c)) = chars.peek() {
        let rest = &sql[i..];
        if !is_operator_char(c) || rest.starts_with("--") || rest.starts_with("/*") {
            break;
        }
        chars.next();
    }
    chars.peek().map_or(sql.len(), |&(i, _)| i)
}

fn eat_quoted(chars: &mut Peekable<CharIndices<'_>>, len: usize, close: char) -> usize {
    while let Some((i, c)) = chars.next() {
        if c != close {
            continue;
        }
        // doubled delimiter is an escaped one
        if next_is(chars, close) {
            chars.next();
            continue;
        }
        return i + c.len_utf8();
    }
    len
}

fn eat_block_comment(chars: &mut Peekable<CharIndices<'_>>, len: usize) -> usize {
    chars.next(); // the '*' of the opener
    let mut prev = '\0';
    for (i, c) in chars.by_ref() {
        if prev == '*' && c == '/' {
            return i + 1;
        }
        prev = c;
    }
    len
}

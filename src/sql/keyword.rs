//! Word lists making up the base SQL grammar.
//!
//! The set mirrors what the query editor has always highlighted: the classic
//! SQL keyword list plus the handful of SQLite words people actually type
//! against a sheet (`in`, `like`, `distinct`, ...). Data type names, builtin
//! functions and boolean constants live in separate tables because they are
//! completed and highlighted differently.
//!
//! Design notes:
//! - Words are matched case‑insensitively via `from_lower` using a pre‑lower‑cased
//!   string slice.
//! - A reserved word always wins over a sheet or column of the same name, so
//!   extending these lists can shadow existing column names. Keep them small.

macro_rules! keywords {
    ($($variant:ident => $text:literal),+ $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Keyword {
            $($variant),+
        }

        impl Keyword {
            /// Every keyword, in completion order.
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant),+];

            /// Attempt to classify a *lower‑cased* word slice into a `Keyword`.
            ///
            /// NOTE: The caller is responsible for lower‑casing the input.
            pub fn from_lower(word: &str) -> Option<Self> {
                match word {
                    $($text => Some(Keyword::$variant),)+
                    _ => None,
                }
            }

            /// Canonical lowercase string form of the keyword.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Keyword::$variant => $text),+
                }
            }
        }
    };
}

keywords! {
    Select => "select",
    Insert => "insert",
    Update => "update",
    Delete => "delete",
    From => "from",
    Where => "where",
    And => "and",
    Or => "or",
    Not => "not",
    Group => "group",
    By => "by",
    Order => "order",
    Limit => "limit",
    Offset => "offset",
    Having => "having",
    As => "as",
    Case => "case",
    When => "when",
    Then => "then",
    Else => "else",
    End => "end",
    Type => "type",
    Left => "left",
    Right => "right",
    Inner => "inner",
    Outer => "outer",
    Cross => "cross",
    Natural => "natural",
    Join => "join",
    On => "on",
    Using => "using",
    Asc => "asc",
    Desc => "desc",
    Union => "union",
    Except => "except",
    Intersect => "intersect",
    All => "all",
    Distinct => "distinct",
    In => "in",
    Is => "is",
    Like => "like",
    Glob => "glob",
    Between => "between",
    Exists => "exists",
    With => "with",
    Create => "create",
    Table => "table",
    Primary => "primary",
    Key => "key",
    If => "if",
    Foreign => "foreign",
    References => "references",
    Default => "default",
    Null => "null",
    Database => "database",
    Drop => "drop",
    Grant => "grant",
}

/// Column type names; highlighted like keywords.
pub const DATA_TYPES: &[&str] = &[
    "int", "integer", "bigint", "numeric", "decimal", "number", "real", "float", "double",
    "money", "bit", "binary", "char", "varchar", "text", "date", "timestamp", "set",
];

/// Builtin scalar and aggregate functions.
pub const FUNCTIONS: &[&str] = &[
    "avg", "count", "first", "last", "max", "min", "sum", "ucase", "lcase", "upper", "lower",
    "mid", "substr", "len", "length", "trim", "replace", "instr", "abs", "round", "rank", "now",
    "format", "coalesce", "ifnull", "isnull", "nullif", "nvl", "typeof",
];

/// Literal words.
pub const CONSTANTS: &[&str] = &["true", "false"];

/// Returns true for any reserved word of the grammar: keywords and data types.
pub fn is_reserved(lower: &str) -> bool {
    Keyword::from_lower(lower).is_some() || DATA_TYPES.contains(&lower)
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

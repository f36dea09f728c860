use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
pub enum SessionState {
    #[default]
    #[display("disabled")]
    Disabled,
    #[display("enabled")]
    Enabled,
}

/// Snapshot of a query session for the widgets mirroring it (limit and page
/// inputs, submit button).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub text: String,
    pub limit: u32,
    pub page: u32,
    pub enabled: bool,
}

/// Rows per page when nothing else is configured.
pub const DEFAULT_LIMIT: u32 = 100;

/// Validate a limit coming from an input widget.
pub(crate) fn parse_limit(n: i64) -> Result<u32> {
    if n <= 0 {
        return Err(Error::validation("limit", format!("{n} is not greater than zero")));
    }
    u32::try_from(n).map_err(|_| Error::validation("limit", format!("{n} is too large")))
}

/// Validate a page number coming from an input widget.
pub(crate) fn parse_page(n: i64) -> Result<u32> {
    if n < 0 {
        return Err(Error::validation("page", format!("{n} is negative")));
    }
    u32::try_from(n).map_err(|_| Error::validation("page", format!("{n} is too large")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, Some(1))]
    #[case(100, Some(100))]
    #[case(0, None)]
    #[case(-5, None)]
    #[case(i64::from(u32::MAX) + 1, None)]
    fn limits(#[case] n: i64, #[case] expected: Option<u32>) {
        assert_eq!(parse_limit(n).ok(), expected);
    }

    #[rstest]
    #[case(0, Some(0))]
    #[case(4, Some(4))]
    #[case(-1, None)]
    fn pages(#[case] n: i64, #[case] expected: Option<u32>) {
        assert_eq!(parse_page(n).ok(), expected);
    }

    #[test]
    fn errors_name_the_field() {
        let err = parse_limit(0).unwrap_err();
        assert_eq!(err.to_string(), "Invalid limit: 0 is not greater than zero");
    }
}

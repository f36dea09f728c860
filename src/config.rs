use crate::*;
use confique::Config as _;

/// Runtime settings, read once from the environment by `main` and passed
/// explicitly to whatever needs them.
#[derive(Debug, confique::Config)]
pub struct Config {
    /// Whether sheet and column names match the query text case-sensitively.
    #[config(env = "SHEETQUERY_CASE_SENSITIVE", default = true)]
    pub case_sensitive: bool,
    /// Rows per page for a freshly opened session.
    #[config(env = "SHEETQUERY_DEFAULT_LIMIT", default = 100)]
    pub default_limit: u32,
    #[config(env = "SHEETQUERY_DARK_MODE", default = false)]
    pub dark_mode: bool,
    /// Sheet the shell opens its editor on.
    #[config(env = "SHEETQUERY_SHEET", default = "sheet1")]
    pub sheet: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Self::builder().env().load()?;
        if config.default_limit == 0 {
            return Err(Error::Config(
                "SHEETQUERY_DEFAULT_LIMIT must be greater than zero".into(),
            ));
        }
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    pub fn case_rule(&self) -> CaseRule {
        if self.case_sensitive {
            CaseRule::Sensitive
        } else {
            CaseRule::Insensitive
        }
    }
}

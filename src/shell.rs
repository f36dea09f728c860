//! Line-oriented driver for a query session without a GUI.
//!
//! Each input line is one directive:
//!
//! ```text
//! select * from sales         replace the query and submit it from page 0
//! :limit 50                   rows per page
//! :page 2                     jump to a page
//! :sheets sales=region,amount costs=region,total
//!                             announce the open sheets
//! :complete re                completions for a prefix
//! :tokens                     show how the current query is highlighted
//! :enable / :disable
//! :quit
//! ```
use crate::*;
use itertools::Itertools as _;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Query(String),
    Limit(i64),
    Page(i64),
    Sheets(SheetRegistry),
    Complete(String),
    Tokens,
    Enable,
    Disable,
    Quit,
}

/// Whether the shell keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl FromStr for Directive {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let Some(rest) = line.strip_prefix(':') else {
            return Ok(Directive::Query(line.to_string()));
        };
        let (name, args) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        let args = args.trim();
        let directive = match name {
            "limit" => Directive::Limit(number("limit", args)?),
            "page" => Directive::Page(number("page", args)?),
            "sheets" => Directive::Sheets(sheets(args)?),
            "complete" => Directive::Complete(args.to_string()),
            "tokens" => Directive::Tokens,
            "enable" => Directive::Enable,
            "disable" => Directive::Disable,
            "quit" | "q" => Directive::Quit,
            other => return Err(Error::validation("directive", format!(":{other} is unknown"))),
        };
        Ok(directive)
    }
}

impl Directive {
    pub fn apply<S: EditingSurface>(self, session: &mut QuerySessionController<S>) -> Result<Flow> {
        match self {
            Directive::Query(text) => {
                session.editor_mut().set_text(&text);
                session.submit(true)?;
            }
            Directive::Limit(n) => session.set_limit(n)?,
            Directive::Page(n) => session.set_page(n)?,
            Directive::Sheets(registry) => session.on_sheets_changed(&registry),
            Directive::Complete(prefix) => {
                let items = rank(session.editor().completions(), &prefix);
                info!("{}", items.iter().join(", "));
            }
            Directive::Tokens => {
                let tokens = session.editor().tokens();
                info!(
                    "{}",
                    tokens
                        .iter()
                        .map(|t| format!("{}:{}", t.text, t.kind))
                        .join(" ")
                );
            }
            Directive::Enable => session.enable(),
            Directive::Disable => session.disable(),
            Directive::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

fn number(field: &'static str, args: &str) -> Result<i64> {
    args.parse()
        .map_err(|_| Error::validation(field, format!("{args:?} is not a number")))
}

/// `name=col,col name2=col` → registry.
fn sheets(args: &str) -> Result<SheetRegistry> {
    let mut registry = SheetRegistry::new();
    for entry in args.split_whitespace() {
        let (name, columns) = entry.split_once('=').unwrap_or((entry, ""));
        if name.is_empty() {
            return Err(Error::validation("sheets", format!("{entry:?} has no sheet name")));
        }
        registry.insert(Sheet::new(
            name,
            columns.split(',').filter(|c| !c.is_empty()),
        ));
    }
    Ok(registry)
}

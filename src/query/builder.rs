use super::*;

/// Assembles a [`QuerySessionController`]. Surface, sheet name, executor and
/// message display are required; `build` reports whichever is missing.
pub struct QuerySessionBuilder<S> {
    surface: Option<S>,
    sheet_name: Option<String>,
    executor: Option<Box<dyn QueryExecutor>>,
    messages: Option<Box<dyn MessageDisplay>>,
    identifiers: Option<IdentifierSet>,
    case: CaseRule,
    dark_mode: bool,
    limit: u32,
}

impl<S: EditingSurface> QuerySessionBuilder<S> {
    pub fn new() -> Self {
        Self {
            surface: None,
            sheet_name: None,
            executor: None,
            messages: None,
            identifiers: None,
            case: CaseRule::default(),
            dark_mode: false,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn surface(mut self, surface: S) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = Some(sheet_name.into());
        self
    }

    pub fn executor(mut self, executor: impl QueryExecutor + 'static) -> Self {
        self.executor = Some(Box::new(executor));
        self
    }

    pub fn messages(mut self, messages: impl MessageDisplay + 'static) -> Self {
        self.messages = Some(Box::new(messages));
        self
    }

    /// Identifiers known when the editor opens; empty by default. A set built
    /// under another case rule is rebuilt under the session's.
    pub fn identifiers(mut self, identifiers: IdentifierSet) -> Self {
        self.identifiers = Some(identifiers);
        self
    }

    pub fn case_rule(mut self, case: CaseRule) -> Self {
        self.case = case;
        self
    }

    pub fn dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Case rule, theme and default limit from the loaded configuration.
    pub fn config(self, config: &Config) -> Self {
        self.case_rule(config.case_rule())
            .dark_mode(config.dark_mode)
            .limit(config.default_limit)
    }

    pub fn build(self) -> Result<QuerySessionController<S>> {
        let surface = self.surface.ok_or_else(|| missing("editing surface"))?;
        let sheet_name = self.sheet_name.ok_or_else(|| missing("sheet name"))?;
        let executor = self.executor.ok_or_else(|| missing("query executor"))?;
        let messages = self.messages.ok_or_else(|| missing("message display"))?;
        if self.limit == 0 {
            return Err(Error::Config("default limit must be greater than zero".into()));
        }

        let identifiers = match self.identifiers {
            Some(set) if set.case_rule() != self.case => {
                IdentifierSet::from_identifiers(self.case, set.iter().cloned())
            }
            Some(set) => set,
            None => IdentifierSet::new(self.case),
        };
        let editor = EditorSession::open(
            surface,
            &sheet_name,
            identifiers,
            self.dark_mode,
            EditorCommand::SubmitQuery,
        )?;

        Ok(QuerySessionController {
            editor,
            executor,
            messages,
            case: self.case,
            limit: self.limit,
            page: 0,
            state: SessionState::Disabled,
        })
    }
}

impl<S: EditingSurface> Default for QuerySessionBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

fn missing(what: &str) -> Error {
    Error::Config(format!("query session needs a {what}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn complete() -> QuerySessionBuilder<BufferSurface> {
        let (tx, _rx) = mpsc::unbounded_channel::<QueryRequest>();
        QuerySessionController::builder()
            .surface(BufferSurface::new())
            .sheet_name("sales")
            .executor(tx)
            .messages(LogMessages)
    }

    fn config_error(builder: QuerySessionBuilder<BufferSurface>) -> String {
        match builder.build() {
            Err(Error::Config(message)) => message,
            Err(e) => panic!("unexpected error {e:?}"),
            Ok(_) => panic!("build should fail"),
        }
    }

    #[test]
    fn builds_disabled_session_with_defaults() -> Result {
        let session = complete().build()?;
        assert!(!session.is_enabled());
        assert_eq!(session.limit(), DEFAULT_LIMIT);
        assert_eq!(session.page(), 0);
        assert_eq!(session.text(), "select * from sales");
        assert_eq!(session.editor().surface().theme(), Some(Theme::Xcode));
        Ok(())
    }

    #[test]
    fn missing_collaborators_fail_startup() {
        let (tx, _rx) = mpsc::unbounded_channel::<QueryRequest>();
        let no_executor = QuerySessionBuilder::new()
            .surface(BufferSurface::new())
            .sheet_name("sales")
            .messages(LogMessages);
        assert!(config_error(no_executor).contains("query executor"));

        let no_messages = QuerySessionBuilder::new()
            .surface(BufferSurface::new())
            .sheet_name("sales")
            .executor(tx);
        assert!(config_error(no_messages).contains("message display"));

        let no_surface = QuerySessionBuilder::<BufferSurface>::new()
            .sheet_name("sales")
            .messages(LogMessages);
        assert!(config_error(no_surface).contains("editing surface"));

        let no_sheet = QuerySessionBuilder::new()
            .surface(BufferSurface::new())
            .messages(LogMessages);
        assert!(config_error(no_sheet).contains("sheet name"));
    }

    #[test]
    fn zero_limit_is_a_configuration_error() {
        assert!(config_error(complete().limit(0)).contains("limit"));
    }

    #[test]
    fn empty_sheet_name_is_a_configuration_error() {
        assert!(config_error(complete().sheet_name("")).contains("sheet name"));
    }

    #[test]
    fn applies_options() -> Result {
        let identifiers = SheetRegistry::from_iter([("sales", vec!["Region"])])
            .identifiers(CaseRule::Insensitive);
        let mut session = complete()
            .case_rule(CaseRule::Insensitive)
            .identifiers(identifiers)
            .dark_mode(true)
            .limit(25)
            .build()?;
        assert_eq!(session.limit(), 25);
        assert_eq!(session.editor().surface().theme(), Some(Theme::Dracula));

        session.editor_mut().set_text("select REGION from SALES");
        let variables = session
            .editor()
            .tokens()
            .into_iter()
            .filter(|t| t.kind == TokenKind::Variable)
            .count();
        assert_eq!(variables, 2);
        Ok(())
    }

    #[test]
    fn initial_identifiers_follow_session_case_rule() -> Result {
        let registry = SheetRegistry::from_iter([("sales", vec!["Region"])]);
        let mut session = complete()
            .case_rule(CaseRule::Insensitive)
            .identifiers(registry.identifiers(CaseRule::Sensitive))
            .build()?;
        assert_eq!(
            session.editor().identifiers().case_rule(),
            CaseRule::Insensitive
        );

        let variables = |session: &QuerySessionController<BufferSurface>| {
            session
                .editor()
                .tokens()
                .into_iter()
                .filter(|t| t.kind == TokenKind::Variable)
                .map(|t| t.text)
                .collect::<Vec<_>>()
        };
        session.editor_mut().set_text("select REGION from SALES");
        let first_paint = variables(&session);
        assert_eq!(first_paint, ["REGION", "SALES"]);

        session.on_sheets_changed(&registry);
        assert_eq!(variables(&session), first_paint);
        Ok(())
    }
}

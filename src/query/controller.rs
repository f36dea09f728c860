use super::*;

/// Drives one query editor: what gets sent, how many rows, which page, and
/// whether sending is allowed at all.
///
/// Starts `Disabled`; whoever owns the session enables it once the sheet has
/// finished loading. Every successful `submit` dispatches exactly once and
/// returns without waiting. Responses may come back in any order when
/// submissions happen in quick succession; dropping stale ones is up to the
/// receiving end.
pub struct QuerySessionController<S> {
    pub(super) editor: EditorSession<S>,
    pub(super) executor: Box<dyn QueryExecutor>,
    pub(super) messages: Box<dyn MessageDisplay>,
    pub(super) case: CaseRule,
    pub(super) limit: u32,
    pub(super) page: u32,
    pub(super) state: SessionState,
}

impl<S: EditingSurface> QuerySessionController<S> {
    pub fn builder() -> QuerySessionBuilder<S> {
        QuerySessionBuilder::new()
    }

    pub fn enable(&mut self) {
        self.transition(SessionState::Enabled);
    }

    pub fn disable(&mut self) {
        self.transition(SessionState::Disabled);
    }

    fn transition(&mut self, state: SessionState) {
        if self.state != state {
            debug!(from = %self.state, to = %state, "query session");
            self.state = state;
        }
    }

    pub fn session_state(&self) -> SessionState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state == SessionState::Enabled
    }

    pub fn text(&self) -> &str {
        self.editor.get_text()
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn state(&self) -> QueryState {
        QueryState {
            text: self.text().to_string(),
            limit: self.limit,
            page: self.page,
            enabled: self.is_enabled(),
        }
    }

    /// Change rows per page; goes back to the first page and re-runs the query.
    pub fn set_limit(&mut self, n: i64) -> Result {
        let limit = parse_limit(n)?;
        self.ensure_enabled()?;
        self.limit = limit;
        self.page = 0;
        self.submit(false)
    }

    /// Jump to page `n` and re-run the query.
    pub fn set_page(&mut self, n: i64) -> Result {
        let page = parse_page(n)?;
        self.ensure_enabled()?;
        self.page = page;
        self.submit(false)
    }

    /// Send the current query, optionally from the first page.
    pub fn submit(&mut self, reset_page: bool) -> Result {
        self.ensure_enabled()?;
        if reset_page {
            self.page = 0;
        }
        self.messages.clear();
        debug!(limit = self.limit, page = self.page, "submitting query");
        self.executor
            .query(self.editor.get_text(), self.limit, self.page);
        Ok(())
    }

    /// The open sheets changed: rebuild the identifier set and hand it to the editor.
    pub fn on_sheets_changed(&mut self, registry: &SheetRegistry) {
        let identifiers = registry.identifiers(self.case);
        debug!(
            sheets = registry.len(),
            identifiers = identifiers.len(),
            "sheets changed"
        );
        self.editor.set_variables(identifiers);
    }

    /// Show why the last query failed.
    pub fn set_message(&mut self, message: &str) {
        self.messages.show(message);
    }

    /// Feed a key press to the editor; the submit chord submits from page 0.
    pub fn handle_key(&mut self, chord: KeyChord) -> Result {
        match self.editor.handle_key(chord) {
            Some(EditorCommand::SubmitQuery) => self.submit(true),
            None => Ok(()),
        }
    }

    pub fn editor(&self) -> &EditorSession<S> {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorSession<S> {
        &mut self.editor
    }

    fn ensure_enabled(&self) -> Result {
        match self.state {
            SessionState::Enabled => Ok(()),
            SessionState::Disabled => Err(Error::InvalidState(
                "cannot query while the session is disabled".into(),
            )),
        }
    }
}

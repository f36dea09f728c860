use super::*;

/// One editing surface bound to one sheet, with highlighting and completion
/// that follow the open sheets.
#[derive(Debug)]
pub struct EditorSession<S, G = SqlGrammar> {
    surface: S,
    grammar: GrammarAdapter<G>,
    sheet_name: String,
}

impl<S: EditingSurface> EditorSession<S, SqlGrammar> {
    /// Open an editor over the base SQL grammar. See [`EditorSession::open_with_grammar`].
    pub fn open(
        surface: S,
        sheet_name: &str,
        identifiers: IdentifierSet,
        dark_mode: bool,
        on_submit: EditorCommand,
    ) -> Result<Self> {
        Self::open_with_grammar(surface, SqlGrammar, sheet_name, identifiers, dark_mode, on_submit)
    }
}

impl<S: EditingSurface, G: BaseGrammar + Clone> EditorSession<S, G> {
    /// Set up `surface` for querying `sheet_name`: theme, grammar, the default
    /// `select * from <sheet>` query and the primary+Enter binding that fires
    /// `on_submit` instead of inserting a newline.
    pub fn open_with_grammar(
        mut surface: S,
        grammar: G,
        sheet_name: &str,
        identifiers: IdentifierSet,
        dark_mode: bool,
        on_submit: EditorCommand,
    ) -> Result<Self> {
        if sheet_name.trim().is_empty() {
            return Err(Error::Config("editor opened without a sheet name".into()));
        }

        let theme = Theme::for_mode(dark_mode);
        let chord = KeyChord::primary_enter(Platform::current());
        surface.set_theme(theme);
        surface.set_value(&default_query(sheet_name));
        surface.bind_command(Command::new(on_submit, chord));

        let mut session = Self {
            surface,
            grammar: GrammarAdapter::new(grammar, identifiers),
            sheet_name: sheet_name.to_string(),
        };
        session.repaint();
        debug!(sheet = sheet_name, %theme, %chord, "editor opened");
        Ok(session)
    }

    /// Swap the identifier set and repaint the current document in place.
    pub fn set_variables(&mut self, identifiers: IdentifierSet) {
        self.grammar.configure(identifiers);
        self.repaint();
    }

    pub fn get_text(&self) -> &str {
        self.surface.value()
    }

    /// Replace the document, e.g. when a query is restored from history.
    pub fn set_text(&mut self, text: &str) {
        self.surface.set_value(text);
        self.repaint();
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    pub fn identifiers(&self) -> &IdentifierSet {
        self.grammar.identifiers()
    }

    /// Feed a key press to the surface. Returns the command it triggered, if any.
    pub fn handle_key(&mut self, chord: KeyChord) -> Option<EditorCommand> {
        match self.surface.handle_key(chord) {
            KeyOutcome::Command(command) => Some(command),
            KeyOutcome::Edited => {
                self.repaint();
                None
            }
            KeyOutcome::Ignored => None,
        }
    }

    /// Completions for the word left of the cursor, unfiltered.
    pub fn completions(&self) -> Vec<CompletionItem> {
        let cursor = self.surface.cursor();
        let prefix = word_before(self.surface.value(), cursor);
        self.grammar
            .completions(prefix, &CompletionContext::at(cursor))
    }

    pub fn tokens(&self) -> Vec<Token> {
        self.grammar.tokenize(self.surface.value())
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn repaint(&mut self) {
        let tokens = self.grammar.tokenize(self.surface.value());
        self.surface.paint(tokens);
    }
}

pub fn default_query(sheet_name: &str) -> String {
    format!("select * from {sheet_name}")
}

/// The identifier characters immediately before `cursor`.
fn word_before(text: &str, cursor: usize) -> &str {
    let head = text.get(..cursor).unwrap_or(text);
    let start = head
        .char_indices()
        .rev()
        .take_while(|&(_, c)| c.is_alphanumeric() || c == '_')
        .last()
        .map_or(head.len(), |(i, _)| i);
    &head[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identifiers(sheet: &str, columns: &[&str]) -> IdentifierSet {
        SheetRegistry::from_iter([(sheet, columns.iter().copied())])
            .identifiers(CaseRule::Sensitive)
    }

    fn open(dark_mode: bool) -> EditorSession<BufferSurface> {
        EditorSession::open(
            BufferSurface::new(),
            "sales",
            identifiers("sales", &["region", "amount"]),
            dark_mode,
            EditorCommand::SubmitQuery,
        )
        .expect("editor should open")
    }

    #[test]
    fn open_prepares_surface() {
        let session = open(true);
        assert_eq!(session.get_text(), "select * from sales");
        assert_eq!(session.surface().theme(), Some(Theme::Dracula));
        assert_eq!(
            session.surface().commands(),
            [Command::new(
                EditorCommand::SubmitQuery,
                KeyChord::primary_enter(Platform::current())
            )]
        );
        let painted: Vec<_> = session.surface().tokens().iter().map(|t| t.kind).collect();
        assert_eq!(
            painted,
            [
                TokenKind::Keyword,
                TokenKind::Operator,
                TokenKind::Keyword,
                TokenKind::Variable
            ]
        );
    }

    #[test]
    fn light_mode_theme() {
        assert_eq!(open(false).surface().theme(), Some(Theme::Xcode));
    }

    #[test]
    fn open_requires_a_sheet_name() {
        let result = EditorSession::open(
            BufferSurface::new(),
            "  ",
            IdentifierSet::default(),
            false,
            EditorCommand::SubmitQuery,
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn set_variables_repaints_in_place() {
        let mut session = open(false);
        session.set_text("select region from costs");
        session.surface_mut().select(7..13);
        let text = session.get_text().to_string();
        let paints = session.surface().paints();

        session.set_variables(identifiers("costs", &["total"]));

        assert_eq!(session.get_text(), text);
        assert_eq!(session.surface().selection(), Some(7..13));
        assert_eq!(session.surface().cursor(), 13);
        assert_eq!(session.surface().paints(), paints + 1);
        let kinds: Vec<_> = session
            .surface()
            .tokens()
            .iter()
            .map(|t| (t.text.as_str(), t.kind))
            .collect();
        assert_eq!(
            kinds,
            [
                ("select", TokenKind::Keyword),
                ("region", TokenKind::Identifier),
                ("from", TokenKind::Keyword),
                ("costs", TokenKind::Variable),
            ]
        );
    }

    #[test]
    fn submit_chord_returns_command_without_editing() {
        let mut session = open(false);
        let command = session.handle_key(KeyChord::primary_enter(Platform::current()));
        assert_eq!(command, Some(EditorCommand::SubmitQuery));
        assert_eq!(session.get_text(), "select * from sales");
    }

    #[test]
    fn typing_repaints() {
        let mut session = open(false);
        session.set_text("select ");
        for c in "amount".chars() {
            assert_eq!(session.handle_key(KeyChord::plain(Key::Char(c))), None);
        }
        let last = session.surface().tokens().last().cloned();
        assert_eq!(last.map(|t| t.kind), Some(TokenKind::Variable));
    }

    #[test]
    fn completions_use_word_before_cursor() {
        let mut session = open(false);
        session.set_text("select re");
        let items = session.completions();
        assert_eq!(items[0].value, "sales");
        assert_eq!(
            rank(items, "re").first().map(|i| i.value.as_str()),
            Some("region")
        );
    }

    #[test]
    fn word_before_cursor() {
        assert_eq!(word_before("select re", 9), "re");
        assert_eq!(word_before("select ", 7), "");
        assert_eq!(word_before("a.año", 6), "año");
        assert_eq!(word_before("abc", 99), "abc");
    }
}

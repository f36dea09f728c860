use super::*;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Theme {
    #[display("dracula")]
    Dracula,
    #[display("xcode")]
    Xcode,
}

impl Theme {
    pub const fn for_mode(dark_mode: bool) -> Self {
        if dark_mode { Theme::Dracula } else { Theme::Xcode }
    }
}

/// What a key press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A bound command fired; the document is untouched.
    Command(EditorCommand),
    /// The document changed.
    Edited,
    Ignored,
}

/// The widget a query is typed into.
///
/// The surface knows nothing about SQL: it stores text, cursor and selection,
/// dispatches key chords, and paints whatever tokens it is given. Bound
/// commands take precedence over the default handling of their exact chord
/// and of no other.
pub trait EditingSurface {
    fn set_theme(&mut self, theme: Theme);
    /// Replace the whole document; the cursor moves to its end.
    fn set_value(&mut self, text: &str);
    fn value(&self) -> &str;
    /// Byte offset of the cursor.
    fn cursor(&self) -> usize;
    fn selection(&self) -> Option<Range<usize>>;
    fn bind_command(&mut self, command: Command);
    fn handle_key(&mut self, chord: KeyChord) -> KeyOutcome;
    /// Repaint highlighting. Must not touch text, cursor or selection.
    fn paint(&mut self, tokens: Vec<Token>);
}

/// Headless in-memory surface, used by the shell and by tests.
#[derive(Debug, Clone, Default)]
pub struct BufferSurface {
    text: String,
    cursor: usize,
    selection: Option<Range<usize>>,
    theme: Option<Theme>,
    commands: Vec<Command>,
    tokens: Vec<Token>,
    paints: usize,
}

impl BufferSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(&self) -> Option<Theme> {
        self.theme
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Tokens from the latest paint.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// How many times highlighting was repainted.
    pub fn paints(&self) -> usize {
        self.paints
    }

    /// Move the cursor, clamped to the document and snapped back to a char boundary.
    pub fn set_cursor(&mut self, cursor: usize) {
        let mut cursor = cursor.min(self.text.len());
        while !self.text.is_char_boundary(cursor) {
            cursor -= 1;
        }
        self.cursor = cursor;
        self.selection = None;
    }

    pub fn select(&mut self, range: Range<usize>) {
        let end = range.end.min(self.text.len());
        let start = range.start.min(end);
        if self.text.is_char_boundary(start) && self.text.is_char_boundary(end) {
            self.cursor = end;
            self.selection = Some(start..end);
        }
    }

    fn insert(&mut self, text: &str) {
        if let Some(range) = self.selection.take() {
            self.text.replace_range(range.clone(), "");
            self.cursor = range.start;
        }
        self.text.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    fn delete_backward(&mut self) -> bool {
        if let Some(range) = self.selection.take() {
            self.text.replace_range(range.clone(), "");
            self.cursor = range.start;
            return true;
        }
        match self.text[..self.cursor].chars().next_back() {
            Some(c) => {
                self.cursor -= c.len_utf8();
                self.text.remove(self.cursor);
                true
            }
            None => false,
        }
    }
}

impl EditingSurface for BufferSurface {
    fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }

    fn set_value(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
        self.selection = None;
    }

    fn value(&self) -> &str {
        &self.text
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    fn bind_command(&mut self, command: Command) {
        self.commands.retain(|c| c.chord != command.chord);
        self.commands.push(command);
    }

    fn handle_key(&mut self, chord: KeyChord) -> KeyOutcome {
        if let Some(bound) = self.commands.iter().find(|c| c.chord == chord) {
            return KeyOutcome::Command(bound.command);
        }
        if !chord.modifiers.is_plain() {
            return KeyOutcome::Ignored;
        }
        match chord.key {
            Key::Enter => self.insert("\n"),
            Key::Tab => self.insert("  "),
            Key::Char(c) => self.insert(c.encode_utf8(&mut [0; 4])),
            Key::Backspace => {
                if !self.delete_backward() {
                    return KeyOutcome::Ignored;
                }
            }
        }
        KeyOutcome::Edited
    }

    fn paint(&mut self, tokens: Vec<Token>) {
        self.tokens = tokens;
        self.paints += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> BufferSurface {
        let mut surface = BufferSurface::new();
        for c in text.chars() {
            surface.handle_key(KeyChord::plain(Key::Char(c)));
        }
        surface
    }

    #[test]
    fn typing_inserts_at_cursor() {
        let mut surface = typed("selct");
        surface.set_cursor(3);
        surface.handle_key(KeyChord::plain(Key::Char('e')));
        assert_eq!(surface.value(), "select");
        assert_eq!(surface.cursor(), 4);
    }

    #[test]
    fn enter_inserts_newline_unless_bound() {
        let submit = KeyChord::primary_enter(Platform::Other);
        let mut surface = typed("a");
        surface.bind_command(Command::new(EditorCommand::SubmitQuery, submit));

        assert_eq!(
            surface.handle_key(submit),
            KeyOutcome::Command(EditorCommand::SubmitQuery)
        );
        assert_eq!(surface.value(), "a");

        assert_eq!(surface.handle_key(KeyChord::plain(Key::Enter)), KeyOutcome::Edited);
        assert_eq!(
            surface.handle_key(KeyChord::new(Modifiers::SHIFT, Key::Enter)),
            KeyOutcome::Edited
        );
        assert_eq!(surface.value(), "a\n\n");
    }

    #[test]
    fn unbound_shortcuts_are_ignored() {
        let mut surface = typed("a");
        assert_eq!(
            surface.handle_key(KeyChord::new(Modifiers::CTRL, Key::Char('x'))),
            KeyOutcome::Ignored
        );
        assert_eq!(surface.value(), "a");
    }

    #[test]
    fn typing_replaces_selection() {
        let mut surface = typed("select x from t");
        surface.select(7..8);
        surface.handle_key(KeyChord::plain(Key::Char('*')));
        assert_eq!(surface.value(), "select * from t");
        assert_eq!(surface.selection(), None);
    }

    #[test]
    fn backspace_handles_multibyte_chars() {
        let mut surface = typed("año");
        surface.handle_key(KeyChord::plain(Key::Backspace));
        surface.handle_key(KeyChord::plain(Key::Backspace));
        assert_eq!(surface.value(), "a");
        assert_eq!(surface.cursor(), 1);

        surface.set_value("");
        assert_eq!(
            surface.handle_key(KeyChord::plain(Key::Backspace)),
            KeyOutcome::Ignored
        );
    }

    #[test]
    fn paint_keeps_cursor() {
        let mut surface = typed("abc");
        surface.set_cursor(1);
        surface.paint(vec![Token::new(TokenKind::Identifier, "abc", 0, 3)]);
        assert_eq!(surface.cursor(), 1);
        assert_eq!(surface.paints(), 1);
        assert_eq!(surface.tokens().len(), 1);
    }
}

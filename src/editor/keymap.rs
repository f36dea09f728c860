/// Operating system family, for picking the primary modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Mac,
    Other,
}

impl Platform {
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Mac
        } else {
            Platform::Other
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    /// Command on macOS, Windows key elsewhere.
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };
    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };
    pub const META: Self = Self {
        meta: true,
        ..Self::NONE
    };
    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    /// Ctrl, or Command on macOS.
    pub const fn primary(platform: Platform) -> Self {
        match platform {
            Platform::Mac => Self::META,
            Platform::Other => Self::CTRL,
        }
    }

    /// True when no modifier that turns a key into a shortcut is held.
    pub fn is_plain(self) -> bool {
        !(self.ctrl || self.alt || self.meta)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Key {
    #[display("Return")]
    Enter,
    #[display("Backspace")]
    Backspace,
    #[display("Tab")]
    Tab,
    #[display("{_0}")]
    Char(char),
}

/// A key together with the modifiers held while pressing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub modifiers: Modifiers,
    pub key: Key,
}

impl KeyChord {
    pub const fn new(modifiers: Modifiers, key: Key) -> Self {
        Self { modifiers, key }
    }

    pub const fn plain(key: Key) -> Self {
        Self::new(Modifiers::NONE, key)
    }

    /// Primary modifier + Enter: the submit shortcut.
    pub const fn primary_enter(platform: Platform) -> Self {
        Self::new(Modifiers::primary(platform), Key::Enter)
    }
}

impl std::fmt::Display for KeyChord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = self.modifiers;
        for (held, name) in [
            (m.ctrl, "Ctrl"),
            (m.alt, "Alt"),
            (m.shift, "Shift"),
            (m.meta, "Command"),
        ] {
            if held {
                write!(f, "{name}-")?;
            }
        }
        write!(f, "{}", self.key)
    }
}

/// Actions an editor can hand back to its owner instead of editing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum EditorCommand {
    #[display("submit-query")]
    SubmitQuery,
}

/// A command bound to one exact key chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub command: EditorCommand,
    pub chord: KeyChord,
}

impl Command {
    pub fn new(command: EditorCommand, chord: KeyChord) -> Self {
        Self { command, chord }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_modifier_per_platform() {
        assert_eq!(
            KeyChord::primary_enter(Platform::Other).to_string(),
            "Ctrl-Return"
        );
        assert_eq!(
            KeyChord::primary_enter(Platform::Mac).to_string(),
            "Command-Return"
        );
    }

    #[test]
    fn plain_modifiers() {
        assert!(Modifiers::NONE.is_plain());
        assert!(Modifiers::SHIFT.is_plain());
        assert!(!Modifiers::CTRL.is_plain());
        assert!(!Modifiers::META.is_plain());
    }

    #[test]
    fn chords_compare_exactly() {
        let submit = KeyChord::primary_enter(Platform::Other);
        let with_shift = KeyChord::new(
            Modifiers {
                shift: true,
                ..Modifiers::CTRL
            },
            Key::Enter,
        );
        assert_ne!(submit, with_shift);
        assert_eq!(with_shift.to_string(), "Ctrl-Shift-Return");
    }
}

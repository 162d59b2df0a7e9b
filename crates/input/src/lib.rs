// Chunk: docs/chunks/launcher_input - Shared input types crate
//!
//! Input event types for keyboard handling.
//!
//! These types abstract over the native event source (a terminal, an X11
//! connection, a test script) and give the launcher core a single Rust-native
//! vocabulary. A front end translates each native key press into one
//! [`KeyEvent`] and hands it to the core; the core never polls.

/// A keyboard event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// The logical key that was pressed
    pub key: Key,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a new KeyEvent with the given key and modifiers.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a KeyEvent for a single character with no modifiers.
    pub fn char(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers::default(),
        }
    }

    /// Creates a KeyEvent for a single character with shift held.
    pub fn char_shifted(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers {
                shift: true,
                ..Default::default()
            },
        }
    }

    /// Creates a KeyEvent for a character with control held (`Ctrl-<ch>`).
    pub fn ctrl(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers {
                control: true,
                ..Default::default()
            },
        }
    }

    /// Creates a KeyEvent for a character with alt held (`Alt-<ch>`).
    pub fn alt(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers {
                alt: true,
                ..Default::default()
            },
        }
    }

    /// Creates a KeyEvent for a non-character key with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::default())
    }

    /// Returns the character this event produces, if any.
    ///
    /// Only unmodified (or shift-only) character keys produce text; chords
    /// with control or alt are commands.
    pub fn produced_char(&self) -> Option<char> {
        match self.key {
            Key::Char(ch) if !self.modifiers.control && !self.modifiers.alt => Some(ch),
            _ => None,
        }
    }
}

/// Modifier keys that can be held during a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key
    pub shift: bool,
    /// Control key
    pub control: bool,
    /// Alt / Meta key
    pub alt: bool,
}

/// Keys that can be pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// A character key (already accounts for shift state)
    Char(char),
    /// Backspace / Delete backward
    Backspace,
    /// Forward delete
    Delete,
    /// Return / Enter
    Return,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Home key
    Home,
    /// End key
    End,
    /// Tab key
    Tab,
    /// Escape key
    Escape,
}

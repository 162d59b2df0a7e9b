// Chunk: docs/chunks/launcher_core - Query editing, filtering and selection core
//!
//! Key map for the launcher.
//!
//! Chord resolution is a stateless pure function: every binding is a single
//! modifier+key combination, so no state machine is needed. Bindings follow the
//! readline / Emacs conventions users expect from a shell prompt.

use arun_input::{Key, KeyEvent};

/// Commands the launcher understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Insert a character at the cursor
    InsertChar(char),
    /// Delete the character before the cursor
    DeleteBackward,
    /// Delete the character at the cursor
    DeleteForward,
    MoveLeft,
    MoveRight,
    MoveToStart,
    MoveToEnd,
    /// Erase everything before the cursor
    KillToStart,
    /// Truncate the query at the cursor
    KillToEnd,
    DeleteWordBackward,
    DeleteWordForward,
    MoveWordLeft,
    MoveWordRight,
    /// Highlight the previous candidate
    SelectPrev,
    /// Highlight the next candidate
    SelectNext,
    /// Run the resolved command
    Commit,
    /// Exit without running anything
    Cancel,
}

/// Resolves a key event to a command.
///
/// Returns `None` for keys the launcher ignores.
pub fn resolve_command(event: &KeyEvent) -> Option<Command> {
    // Printable characters (shift is part of the character)
    if let Some(ch) = event.produced_char().filter(|ch| !ch.is_control()) {
        return Some(Command::InsertChar(ch));
    }

    let mods = &event.modifiers;
    match event.key {
        // Ctrl chords
        Key::Char(ch) if mods.control && !mods.alt => match ch.to_ascii_lowercase() {
            'h' => Some(Command::DeleteBackward),
            'd' => Some(Command::DeleteForward),
            'b' => Some(Command::MoveLeft),
            'f' => Some(Command::MoveRight),
            'a' => Some(Command::MoveToStart),
            'e' => Some(Command::MoveToEnd),
            'u' => Some(Command::KillToStart),
            'k' => Some(Command::KillToEnd),
            'w' => Some(Command::DeleteWordBackward),
            'p' => Some(Command::SelectPrev),
            'n' => Some(Command::SelectNext),
            'c' | 'g' => Some(Command::Cancel),
            _ => None,
        },

        // Alt (Meta) chords
        Key::Char(ch) if mods.alt && !mods.control => match ch.to_ascii_lowercase() {
            'd' => Some(Command::DeleteWordForward),
            'b' => Some(Command::MoveWordLeft),
            'f' => Some(Command::MoveWordRight),
            _ => None,
        },

        Key::Backspace if mods.alt || mods.control => Some(Command::DeleteWordBackward),
        Key::Backspace => Some(Command::DeleteBackward),
        Key::Delete => Some(Command::DeleteForward),

        Key::Left if mods.control || mods.alt => Some(Command::MoveWordLeft),
        Key::Right if mods.control || mods.alt => Some(Command::MoveWordRight),
        Key::Left => Some(Command::MoveLeft),
        Key::Right => Some(Command::MoveRight),
        Key::Home => Some(Command::MoveToStart),
        Key::End => Some(Command::MoveToEnd),

        Key::Up => Some(Command::SelectPrev),
        Key::Down => Some(Command::SelectNext),
        Key::Tab if mods.shift => Some(Command::SelectPrev),
        Key::Tab => Some(Command::SelectNext),

        Key::Return => Some(Command::Commit),
        Key::Escape => Some(Command::Cancel),

        _ => None,
    }
}

// Chunk: docs/chunks/launcher_core - Query editing, filtering and selection core
//! Launcher event types.
//!
//! Every front end (the terminal surface, a test script) translates its native
//! input into these variants and delivers them one at a time. The launcher
//! processes each event to completion before the next is read.

use arun_input::KeyEvent;

/// Input delivered to [`Launcher::handle_event`](crate::launcher::Launcher::handle_event).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LauncherEvent {
    /// A key press
    Key(KeyEvent),

    /// Text pasted in one piece (bracketed paste)
    Paste(String),

    /// The surface became visible or changed size; everything must be repainted
    Expose,

    /// The launcher lost input focus; exits without running anything
    FocusLost,

    /// An explicit cancel from outside the key map (e.g. a signal)
    Cancel,
}

// Chunk: docs/chunks/launcher_core - Query editing, filtering and selection core
//!
//! arun library interface.
//!
//! The launcher core is pure interaction state: [`Launcher`] owns the query
//! line, the filtered candidate list and the redraw planner, and turns one
//! [`LauncherEvent`] at a time into a repaint plan or a final outcome. The
//! terminal surface, the process launcher and the candidate source are
//! collaborators behind small traits, so the core is testable without a
//! terminal.
//!
//! Data flow for one event:
//!
//! 1. A key event edits the [`LineBuffer`](arun_buffer::LineBuffer)
//! 2. If the query changed, the filter recomputes the drawable candidates
//! 3. The [`RedrawPlanner`] picks a full, partial or empty repaint
//! 4. The renderer paints the resulting [`Frame`]
//! 5. On commit, the resolver picks the command and the launcher exits

pub mod candidate_source;
pub mod candidate_viewport;
pub mod config;
pub mod event_loop;
pub mod filter;
pub mod keymap;
pub mod launch;
pub mod launcher;
pub mod launcher_event;
pub mod logging;
pub mod paint;
pub mod redraw;
pub mod resolver;
pub mod terminal;

pub use candidate_source::{CandidateSource, PathScanner, StaticSource, Universe};
pub use candidate_viewport::CandidateViewport;
pub use config::{ConfigError, LauncherConfig, Palette};
pub use event_loop::{EventLoop, EventSource, Exit, Renderer};
pub use launch::{LaunchError, ProcessLauncher, ShellLauncher};
pub use launcher::{Launcher, LauncherOutcome};
pub use launcher_event::LauncherEvent;
pub use paint::{Frame, PaintRow, QueryLine, RowContent};
pub use redraw::{Navigation, Redraw, RedrawDecision, RedrawPlanner};
pub use resolver::Resolution;
pub use terminal::{SetupError, TerminalRenderer, TerminalSession};

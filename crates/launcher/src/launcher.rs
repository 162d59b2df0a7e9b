// Chunk: docs/chunks/launcher_core - Query editing, filtering and selection core
//!
//! The launcher's application state.
//!
//! [`Launcher`] is the single explicit state value: the query line, the
//! candidate viewport and the redraw planner. It borrows the universe, which
//! outlives it. Every event is processed to completion by
//! [`handle_event`](Launcher::handle_event), which returns what must be
//! repainted or how the launcher ends.
//!
//! # Design
//!
//! The launcher is pure interaction state with no terminal or process
//! dependencies. The event loop feeds it events, asks it for a [`Frame`] when
//! something is dirty, and hands a committed command to the process launcher.
//! Invalid operations (backspace at column 0, navigation past the last
//! candidate, insertion into a full buffer) are local no-ops; the launcher
//! never returns an error.
//!
//! # Example
//!
//! ```
//! use arun::{Launcher, LauncherEvent, LauncherOutcome, Universe};
//! use arun_input::{Key, KeyEvent};
//!
//! let universe = Universe::new(["cat", "cp", "ls"]);
//! let mut launcher = Launcher::new(&universe, 10, 25, 256);
//!
//! launcher.handle_event(LauncherEvent::Expose);
//! launcher.handle_event(LauncherEvent::Key(KeyEvent::char('c')));
//! assert_eq!(launcher.candidates().drawable(), ["cat", "cp"]);
//!
//! let outcome = launcher.handle_event(LauncherEvent::Key(KeyEvent::plain(Key::Return)));
//! assert_eq!(outcome, LauncherOutcome::Commit("cat".to_owned()));
//! ```

use arun_buffer::{LineBuffer, LineChange};
use arun_input::KeyEvent;

use crate::candidate_source::Universe;
use crate::candidate_viewport::CandidateViewport;
use crate::config::LauncherConfig;
use crate::keymap::{resolve_command, Command};
use crate::launcher_event::LauncherEvent;
use crate::paint::{self, Frame, QueryLine};
use crate::redraw::{Navigation, Redraw, RedrawPlanner, Transition};
use crate::resolver;

/// What processing one event produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LauncherOutcome {
    /// Keep running; repaint what `Redraw` says (possibly nothing)
    Redraw(Redraw),
    /// Run this command and exit
    Commit(String),
    /// Exit without running anything
    Cancelled,
}

/// The launcher's state: query line, candidate list and redraw planner.
#[derive(Debug, Clone)]
pub struct Launcher<'u> {
    line: LineBuffer,
    candidates: CandidateViewport<'u>,
    planner: RedrawPlanner,
}

impl<'u> Launcher<'u> {
    /// Creates a launcher with an empty query over `universe`.
    pub fn new(
        universe: &'u Universe,
        page_size: usize,
        display_width: usize,
        capacity: usize,
    ) -> Self {
        Self {
            line: LineBuffer::new(capacity, display_width),
            candidates: CandidateViewport::new(universe, page_size),
            planner: RedrawPlanner::new(),
        }
    }

    /// Creates a launcher sized by `config`.
    pub fn from_config(universe: &'u Universe, config: &LauncherConfig) -> Self {
        Self::new(
            universe,
            config.page_size,
            config.display_width,
            config.capacity,
        )
    }

    pub fn line(&self) -> &LineBuffer {
        &self.line
    }

    pub fn candidates(&self) -> &CandidateViewport<'u> {
        &self.candidates
    }

    pub fn planner(&self) -> &RedrawPlanner {
        &self.planner
    }

    /// Processes one event to completion.
    pub fn handle_event(&mut self, event: LauncherEvent) -> LauncherOutcome {
        match event {
            LauncherEvent::Key(key) => self.handle_key(&key),
            LauncherEvent::Paste(text) => {
                let change = match self.line.insert_str(&text) {
                    Ok(change) => change,
                    Err(err) => {
                        tracing::debug!(%err, chars = text.chars().count(), "paste rejected");
                        LineChange::None
                    }
                };
                LauncherOutcome::Redraw(self.line_changed(change))
            }
            LauncherEvent::Expose => LauncherOutcome::Redraw(Redraw {
                list: self.planner.plan(Transition::Expose),
                line: true,
            }),
            LauncherEvent::FocusLost => {
                tracing::info!("focus lost; cancelling");
                LauncherOutcome::Cancelled
            }
            LauncherEvent::Cancel => self.cancel(),
        }
    }

    /// Builds the paint content for a redraw.
    pub fn frame(&self, redraw: &Redraw) -> Frame<'u> {
        Frame {
            list: redraw.list.clone(),
            line: redraw.line.then(|| QueryLine::from_buffer(&self.line)),
            rows: paint::rows(&redraw.list, &self.candidates),
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> LauncherOutcome {
        match resolve_command(key) {
            Some(command) => self.execute(command),
            None => {
                tracing::trace!(?key, "unbound key");
                LauncherOutcome::Redraw(self.line_changed(LineChange::None))
            }
        }
    }

    fn execute(&mut self, command: Command) -> LauncherOutcome {
        let change = match command {
            Command::InsertChar(ch) => match self.line.insert_char(ch) {
                Ok(change) => change,
                Err(err) => {
                    tracing::debug!(%err, "insertion rejected");
                    LineChange::None
                }
            },
            Command::DeleteBackward => self.line.delete_backward(),
            Command::DeleteForward => self.line.delete_forward(),
            Command::MoveLeft => self.line.move_left(),
            Command::MoveRight => self.line.move_right(),
            Command::MoveToStart => self.line.move_to_start(),
            Command::MoveToEnd => self.line.move_to_end(),
            Command::KillToStart => self.line.kill_to_start(),
            Command::KillToEnd => self.line.kill_to_end(),
            Command::DeleteWordBackward => self.line.delete_word_backward(),
            Command::DeleteWordForward => self.line.delete_word_forward(),
            Command::MoveWordLeft => self.line.move_word_left(),
            Command::MoveWordRight => self.line.move_word_right(),
            Command::SelectPrev => {
                let navigation = self.candidates.select_prev();
                return LauncherOutcome::Redraw(self.navigated(navigation));
            }
            Command::SelectNext => {
                let navigation = self.candidates.select_next();
                return LauncherOutcome::Redraw(self.navigated(navigation));
            }
            Command::Commit => return self.commit(),
            Command::Cancel => return self.cancel(),
        };
        LauncherOutcome::Redraw(self.line_changed(change))
    }

    /// Refilters if the query changed and plans the repaint.
    fn line_changed(&mut self, change: LineChange) -> Redraw {
        let transition = if change.query_changed() {
            self.candidates.apply_query(&self.line.text());
            Transition::QueryChanged
        } else {
            Transition::Unchanged
        };
        let list = self.planner.plan(transition);
        Redraw {
            list,
            line: change.is_changed() && self.planner.is_exposed(),
        }
    }

    fn navigated(&mut self, navigation: Navigation) -> Redraw {
        Redraw {
            list: self.planner.plan(Transition::Navigated(navigation)),
            line: false,
        }
    }

    fn commit(&mut self) -> LauncherOutcome {
        let command = resolver::resolve(&self.line.text(), &self.candidates).into_command();
        self.line.clear();
        tracing::info!(%command, "committing");
        LauncherOutcome::Commit(command)
    }

    fn cancel(&mut self) -> LauncherOutcome {
        tracing::info!("cancelled");
        LauncherOutcome::Cancelled
    }
}

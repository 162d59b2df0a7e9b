// Chunk: docs/chunks/terminal_surface - Terminal front end for the launcher
//! Blocking event loop.
//!
//! This module provides [`EventLoop`], which owns the [`Launcher`] directly
//! together with an [`EventSource`] and a [`Renderer`]. The loop is single
//! threaded and cooperative:
//!
//! ```text
//! EventSource::next_event() ──→ Launcher::handle_event() ──→ LauncherOutcome
//!        ▲                                                        │
//!        │                      Redraw (dirty) ──→ Renderer::paint(Frame)
//!        └────────────────────────────────────────────────────────┤
//!                               Commit / Cancelled ──→ Exit
//! ```
//!
//! Each event is processed to completion (edit, filter, redraw plan, paint)
//! before the next one is read. Nothing runs in the background.

use std::io;

use crate::launcher::{Launcher, LauncherOutcome};
use crate::launcher_event::LauncherEvent;
use crate::paint::Frame;

/// Delivers launcher events, blocking until one is available.
pub trait EventSource {
    /// Returns the next event, or `None` once the source is exhausted.
    fn next_event(&mut self) -> io::Result<Option<LauncherEvent>>;
}

/// Paints frames.
pub trait Renderer {
    fn paint(&mut self, frame: &Frame<'_>) -> io::Result<()>;
}

impl<S: EventSource + ?Sized> EventSource for &mut S {
    fn next_event(&mut self) -> io::Result<Option<LauncherEvent>> {
        (**self).next_event()
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn paint(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        (**self).paint(frame)
    }
}

/// How the loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit {
    /// The user committed this command
    Commit(String),
    /// The user cancelled, focus was lost, or the event source closed
    Cancelled,
}

/// The event loop that owns the launcher state.
pub struct EventLoop<'u, S, R> {
    launcher: Launcher<'u>,
    source: S,
    renderer: R,
}

impl<'u, S: EventSource, R: Renderer> EventLoop<'u, S, R> {
    pub fn new(launcher: Launcher<'u>, source: S, renderer: R) -> Self {
        Self {
            launcher,
            source,
            renderer,
        }
    }

    pub fn launcher(&self) -> &Launcher<'u> {
        &self.launcher
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Runs until the launcher commits or cancels.
    pub fn run(&mut self) -> io::Result<Exit> {
        loop {
            let Some(event) = self.source.next_event()? else {
                tracing::info!("event source closed; cancelling");
                return Ok(Exit::Cancelled);
            };
            if let Some(exit) = self.process_event(event)? {
                return Ok(exit);
            }
        }
    }

    /// Processes one event and paints if anything became dirty.
    ///
    /// Returns `Some` when the event ended the launcher.
    pub fn process_event(&mut self, event: LauncherEvent) -> io::Result<Option<Exit>> {
        match self.launcher.handle_event(event) {
            LauncherOutcome::Redraw(redraw) => {
                if redraw.is_dirty() {
                    let frame = self.launcher.frame(&redraw);
                    self.renderer.paint(&frame)?;
                }
                Ok(None)
            }
            LauncherOutcome::Commit(command) => Ok(Some(Exit::Commit(command))),
            LauncherOutcome::Cancelled => Ok(Some(Exit::Cancelled)),
        }
    }
}

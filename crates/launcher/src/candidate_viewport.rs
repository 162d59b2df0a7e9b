// Chunk: docs/chunks/launcher_core - Query editing, filtering and selection core
//!
//! The filtered candidate list, its selection and its scroll window.
//!
//! [`CandidateViewport`] owns the drawable subsequence of the universe for the
//! current query, the selected index and a [`SlidingWindow`] of `page_size`
//! rows. It is pure interaction state: it knows nothing about terminals or
//! colors, only which candidates are eligible and which one is highlighted.
//!
//! # Invariants
//!
//! - The drawable list borrows from the universe; no candidate is copied.
//! - `selection` is `Some(i)` with `i < drawable.len()` when the list is
//!   non-empty and `None` when it is empty.
//! - The window always spans exactly `page_size` rows and contains the
//!   selection. Rows past the end of the drawable list are blank.

use std::ops::Range;

use arun_buffer::SlidingWindow;

use crate::candidate_source::Universe;
use crate::filter;
use crate::redraw::Navigation;

/// The drawable candidates, the selection and the list window.
#[derive(Debug, Clone)]
pub struct CandidateViewport<'u> {
    universe: &'u Universe,
    /// Candidates matching the current query, in universe order
    drawable: Vec<&'u str>,
    /// Index into `drawable` of the highlighted candidate
    selection: Option<usize>,
    /// The selection before the last navigation, for highlight diffs
    previous: Option<usize>,
    window: SlidingWindow,
}

impl<'u> CandidateViewport<'u> {
    /// Creates a viewport showing the whole universe (the empty query).
    pub fn new(universe: &'u Universe, page_size: usize) -> Self {
        let drawable = filter::recompute(universe, "");
        let selection = if drawable.is_empty() { None } else { Some(0) };
        Self {
            universe,
            drawable,
            selection,
            previous: None,
            window: SlidingWindow::new(page_size),
        }
    }

    /// Returns the universe this viewport filters.
    pub fn universe(&self) -> &'u Universe {
        self.universe
    }

    /// Returns the candidates matching the current query.
    pub fn drawable(&self) -> &[&'u str] {
        &self.drawable
    }

    /// Returns the number of drawable candidates.
    pub fn len(&self) -> usize {
        self.drawable.len()
    }

    /// Returns true if no candidate matches the current query.
    pub fn is_empty(&self) -> bool {
        self.drawable.is_empty()
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn previous_selection(&self) -> Option<usize> {
        self.previous
    }

    /// Returns the highlighted candidate, if any.
    pub fn selected(&self) -> Option<&'u str> {
        self.selection.and_then(|index| self.candidate(index))
    }

    /// Returns the drawable candidate at `index`.
    pub fn candidate(&self, index: usize) -> Option<&'u str> {
        self.drawable.get(index).copied()
    }

    /// Returns the number of rows in the list window.
    pub fn page_size(&self) -> usize {
        self.window.size()
    }

    /// Returns the nominal window `[rs, re)`; `re - rs` is always the page size.
    pub fn window(&self) -> Range<usize> {
        self.window.range()
    }

    /// Returns the screen row (offset from the top of the list) of a drawable
    /// index, or `None` if it is scrolled out of view.
    pub fn screen_row(&self, index: usize) -> Option<usize> {
        self.window.row_to_visible_offset(index)
    }

    /// Returns the drawable index shown on a screen row, or `None` for a blank row.
    pub fn index_at_row(&self, row: usize) -> Option<usize> {
        let index = self.window.visible_offset_to_row(row);
        (row < self.page_size() && index < self.drawable.len()).then_some(index)
    }

    // ==================== Filtering ====================

    /// Recomputes the drawable list for a new query.
    ///
    /// The window returns to the top. The selection survives only if it
    /// still indexes a drawable candidate inside that first page; otherwise
    /// it falls back to the first candidate.
    pub fn apply_query(&mut self, query: &str) {
        self.drawable = filter::recompute(self.universe, query);
        self.window.reset();

        let count = self.drawable.len();
        let page = self.window.range();
        self.selection = match self.selection {
            Some(index) if index < count && page.contains(&index) => Some(index),
            _ if count > 0 => Some(0),
            _ => None,
        };

        tracing::debug!(
            query,
            drawable = count,
            selection = ?self.selection,
            "recomputed candidates"
        );
    }

    // ==================== Navigation ====================

    /// Moves the selection down one candidate.
    pub fn select_next(&mut self) -> Navigation {
        match self.selection {
            Some(index) if index + 1 < self.drawable.len() => self.move_to(index, index + 1),
            _ => Navigation::Unchanged,
        }
    }

    /// Moves the selection up one candidate.
    pub fn select_prev(&mut self) -> Navigation {
        match self.selection {
            Some(index) if index > 0 => self.move_to(index, index - 1),
            _ => Navigation::Unchanged,
        }
    }

    fn move_to(&mut self, previous: usize, selection: usize) -> Navigation {
        self.previous = Some(previous);
        self.selection = Some(selection);
        let scrolled = self.window.ensure_visible(selection);
        Navigation::Moved {
            selection,
            previous,
            scrolled,
        }
    }
}

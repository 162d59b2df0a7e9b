// Chunk: docs/chunks/sliding_window - Shared bounded window over an indexable sequence
//!
//! Reusable window arithmetic for anything that shows a fixed-size slice of a
//! longer sequence.
//!
//! `SlidingWindow` is the common core of the query line's horizontal scroll and
//! the candidate list's vertical scroll. It handles:
//!
//! - Tracking the first visible index
//! - Computing which indices are visible for a given sequence length
//! - Following an index (or a caret between indices) by the minimal shift
//! - Converting between sequence indices and on-screen offsets
//!
//! This is a pure data structure with no knowledge of text or candidates, so it
//! is fully testable in isolation.
//!
//! # Item vs caret semantics
//!
//! A list selection is an *item*: it must lie in `[start, end)`. A text cursor
//! is a *caret* that sits between characters and may rest on `end` itself
//! (after the last visible character). [`ensure_visible`](SlidingWindow::ensure_visible)
//! and [`ensure_caret_visible`](SlidingWindow::ensure_caret_visible) implement the
//! two rules.
//!
//! # Example
//!
//! ```
//! use arun_buffer::SlidingWindow;
//!
//! let mut window = SlidingWindow::new(3);
//! assert_eq!(window.range(), 0..3);
//!
//! // Selecting item 3 pushes the window down by exactly one row
//! assert!(window.ensure_visible(3));
//! assert_eq!(window.range(), 1..4);
//! ```

use std::ops::Range;

/// A fixed-size window `[start, start + size)` over a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidingWindow {
    /// First index covered by the window
    start: usize,
    /// Number of indices the window covers
    size: usize,
}

impl SlidingWindow {
    /// Creates a window of the given size positioned at index 0.
    pub fn new(size: usize) -> Self {
        Self { start: 0, size }
    }

    /// Returns the first index covered by the window.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the window size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the exclusive end of the nominal window.
    pub fn end(&self) -> usize {
        self.start + self.size
    }

    /// Returns the nominal window `[start, start + size)`.
    ///
    /// The nominal range always spans exactly `size` indices, even when the
    /// underlying sequence is shorter. Rows past the sequence end are blank.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Returns the part of the window that overlaps a sequence of length `len`.
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        self.start.min(len)..self.end().min(len)
    }

    /// Moves the window back to index 0.
    ///
    /// Returns `true` if the window moved.
    pub fn reset(&mut self) -> bool {
        let moved = self.start != 0;
        self.start = 0;
        moved
    }

    /// Ensures an item index lies inside `[start, end)`.
    ///
    /// When the index is outside, the window shifts by exactly the distance to
    /// the nearer edge; it is never re-centred. Returns `true` if the window moved.
    pub fn ensure_visible(&mut self, index: usize) -> bool {
        if self.size == 0 {
            return false;
        }

        if index < self.start {
            self.start = index;
            true
        } else if index >= self.end() {
            self.start = index + 1 - self.size;
            true
        } else {
            false
        }
    }

    /// Ensures a caret position lies inside `[start, end]`.
    ///
    /// Unlike items, a caret may sit on `end` (after the last visible
    /// character). Returns `true` if the window moved.
    pub fn ensure_caret_visible(&mut self, pos: usize) -> bool {
        if pos < self.start {
            self.start = pos;
            true
        } else if pos > self.end() {
            self.start = pos - self.size;
            true
        } else {
            false
        }
    }

    /// Pulls the window back so it does not extend past a sequence of length `len`
    /// more than necessary.
    ///
    /// After clamping, `start <= len.saturating_sub(size)`: a sequence at least as
    /// long as the window fills it completely, a shorter one starts at 0.
    /// Returns `true` if the window moved.
    pub fn clamp_to_len(&mut self, len: usize) -> bool {
        let max_start = len.saturating_sub(self.size);
        if self.start > max_start {
            self.start = max_start;
            true
        } else {
            false
        }
    }

    /// Converts a sequence index to an offset from the top of the window.
    ///
    /// Returns `None` if the index is outside the nominal window.
    pub fn row_to_visible_offset(&self, index: usize) -> Option<usize> {
        if self.range().contains(&index) {
            Some(index - self.start)
        } else {
            None
        }
    }

    /// Converts an offset from the top of the window to a sequence index.
    pub fn visible_offset_to_row(&self, offset: usize) -> usize {
        self.start + offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Basic construction ====================

    #[test]
    fn test_new() {
        let window = SlidingWindow::new(10);
        assert_eq!(window.start(), 0);
        assert_eq!(window.size(), 10);
        assert_eq!(window.end(), 10);
        assert_eq!(window.range(), 0..10);
    }

    #[test]
    fn test_visible_range_shorter_sequence() {
        let window = SlidingWindow::new(10);
        assert_eq!(window.visible_range(4), 0..4);
        assert_eq!(window.visible_range(0), 0..0);
    }

    #[test]
    fn test_visible_range_longer_sequence() {
        let mut window = SlidingWindow::new(3);
        window.ensure_visible(5);
        assert_eq!(window.visible_range(100), 3..6);
    }

    // ==================== ensure_visible (items) ====================

    #[test]
    fn test_ensure_visible_inside_is_noop() {
        let mut window = SlidingWindow::new(3);
        assert!(!window.ensure_visible(0));
        assert!(!window.ensure_visible(2));
        assert_eq!(window.range(), 0..3);
    }

    #[test]
    fn test_ensure_visible_one_past_end_shifts_by_one() {
        let mut window = SlidingWindow::new(3);
        assert!(window.ensure_visible(3));
        assert_eq!(window.range(), 1..4);
    }

    #[test]
    fn test_ensure_visible_above_start_shifts_up() {
        let mut window = SlidingWindow::new(3);
        window.ensure_visible(5);
        assert_eq!(window.range(), 3..6);

        assert!(window.ensure_visible(2));
        assert_eq!(window.range(), 2..5);
    }

    #[test]
    fn test_ensure_visible_far_jump_lands_on_nearer_edge() {
        let mut window = SlidingWindow::new(4);
        window.ensure_visible(20);
        // Index 20 is the last row, not centred
        assert_eq!(window.range(), 17..21);
    }

    #[test]
    fn test_ensure_visible_zero_size_never_moves() {
        let mut window = SlidingWindow::new(0);
        assert!(!window.ensure_visible(7));
        assert_eq!(window.start(), 0);
    }

    // ==================== ensure_caret_visible ====================

    #[test]
    fn test_caret_may_rest_on_end() {
        let mut window = SlidingWindow::new(5);
        assert!(!window.ensure_caret_visible(5));
        assert_eq!(window.range(), 0..5);
    }

    #[test]
    fn test_caret_past_end_shifts_minimally() {
        let mut window = SlidingWindow::new(5);
        assert!(window.ensure_caret_visible(6));
        assert_eq!(window.range(), 1..6);
    }

    #[test]
    fn test_caret_before_start_shifts_left() {
        let mut window = SlidingWindow::new(5);
        window.ensure_caret_visible(12);
        assert_eq!(window.start(), 7);

        assert!(window.ensure_caret_visible(3));
        assert_eq!(window.start(), 3);
    }

    // ==================== clamp_to_len ====================

    #[test]
    fn test_clamp_pulls_window_back() {
        let mut window = SlidingWindow::new(5);
        window.ensure_caret_visible(12);
        assert_eq!(window.start(), 7);

        assert!(window.clamp_to_len(10));
        assert_eq!(window.start(), 5);
    }

    #[test]
    fn test_clamp_short_sequence_starts_at_zero() {
        let mut window = SlidingWindow::new(5);
        window.ensure_caret_visible(8);
        assert!(window.clamp_to_len(3));
        assert_eq!(window.start(), 0);
    }

    #[test]
    fn test_clamp_within_bounds_is_noop() {
        let mut window = SlidingWindow::new(5);
        window.ensure_caret_visible(8);
        assert!(!window.clamp_to_len(20));
        assert_eq!(window.start(), 3);
    }

    // ==================== reset and offsets ====================

    #[test]
    fn test_reset() {
        let mut window = SlidingWindow::new(3);
        assert!(!window.reset());
        window.ensure_visible(9);
        assert!(window.reset());
        assert_eq!(window.range(), 0..3);
    }

    #[test]
    fn test_row_to_visible_offset() {
        let mut window = SlidingWindow::new(3);
        window.ensure_visible(4);
        assert_eq!(window.range(), 2..5);
        assert_eq!(window.row_to_visible_offset(1), None);
        assert_eq!(window.row_to_visible_offset(2), Some(0));
        assert_eq!(window.row_to_visible_offset(4), Some(2));
        assert_eq!(window.row_to_visible_offset(5), None);
    }

    #[test]
    fn test_visible_offset_to_row() {
        let mut window = SlidingWindow::new(3);
        window.ensure_visible(4);
        assert_eq!(window.visible_offset_to_row(0), 2);
        assert_eq!(window.visible_offset_to_row(2), 4);
    }
}

// Chunk: docs/chunks/line_buffer - Capacity-checked single-line query buffer
//!
//! LineBuffer: the single-line query model.
//!
//! The buffer stores the query as a `Vec<char>` bounded by a fixed capacity,
//! an insertion cursor, and a [`SlidingWindow`] of fixed display width that
//! selects which characters are visible.
//!
//! All content changes go through one primitive, [`LineBuffer::replace_range`],
//! which validates the range and the resulting length before touching the
//! content. Everything else (typing, deletion, kill, word deletion) is
//! expressed in terms of it.
//!
//! # Invariants
//!
//! - `0 <= cursor <= len <= capacity`
//! - window `[vs, ve)` with `ve = min(vs + width, len)`
//! - `vs <= cursor <= ve`, and `ve - vs == width` whenever `len >= width`
//!
//! Every operation re-establishes the window with the scroll-follow rule: if the
//! cursor left the window, shift it by exactly the distance to the nearer edge.

use std::ops::Range;

use crate::error::BufferError;
use crate::types::LineChange;
use crate::window::SlidingWindow;

/// A single-line, capacity-bounded text buffer with cursor and visible window.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    /// Query characters, never longer than `capacity`
    chars: Vec<char>,
    /// Maximum number of characters
    capacity: usize,
    /// Insertion index, `0..=chars.len()`
    cursor: usize,
    /// Horizontal window of width `display_width`
    window: SlidingWindow,
}

impl LineBuffer {
    /// Creates an empty buffer holding at most `capacity` characters, showing
    /// `display_width` of them at a time.
    pub fn new(capacity: usize, display_width: usize) -> Self {
        Self {
            chars: Vec::with_capacity(capacity),
            capacity,
            cursor: 0,
            window: SlidingWindow::new(display_width),
        }
    }

    // ==================== Accessors ====================

    /// Returns the query text.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Returns the query length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the query is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the maximum query length.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the width of the visible window.
    pub fn display_width(&self) -> usize {
        self.window.size()
    }

    /// Returns the cursor position (insertion index).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the visible window `[vs, ve)` in character indices.
    pub fn window(&self) -> Range<usize> {
        self.window.visible_range(self.chars.len())
    }

    /// Returns the characters inside the visible window.
    pub fn visible_text(&self) -> String {
        self.chars[self.window()].iter().collect()
    }

    /// Returns the cursor column relative to the start of the visible window.
    pub fn cursor_column(&self) -> usize {
        self.cursor - self.window().start
    }

    // ==================== Primitive ====================

    /// Replaces `range` with `replacement`.
    ///
    /// This is the only operation that touches the content. The range must lie
    /// within the current content and the resulting length must not exceed the
    /// capacity; otherwise the buffer is left untouched. The cursor is not
    /// adjusted here.
    pub fn replace_range(
        &mut self,
        range: Range<usize>,
        replacement: &[char],
    ) -> Result<(), BufferError> {
        let len = self.chars.len();
        if range.start > range.end || range.end > len {
            return Err(BufferError::OutOfBounds {
                start: range.start,
                end: range.end,
                len,
            });
        }

        let new_len = len - range.len() + replacement.len();
        if new_len > self.capacity {
            return Err(BufferError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.chars.splice(range, replacement.iter().copied());
        Ok(())
    }

    // ==================== Insertion ====================

    /// Inserts a character at the cursor.
    ///
    /// Rejects control characters and insertions into a full buffer.
    pub fn insert_char(&mut self, ch: char) -> Result<LineChange, BufferError> {
        if ch.is_control() {
            return Err(BufferError::Unprintable(ch));
        }
        self.replace_range(self.cursor..self.cursor, &[ch])?;
        self.cursor += 1;
        self.follow_cursor();
        Ok(LineChange::Content)
    }

    /// Inserts a run of text at the cursor (paste).
    ///
    /// Control characters (newlines, tabs) are dropped. The remaining characters
    /// are inserted all-or-nothing: if they do not fit, nothing is inserted.
    pub fn insert_str(&mut self, text: &str) -> Result<LineChange, BufferError> {
        let printable: Vec<char> = text.chars().filter(|ch| !ch.is_control()).collect();
        if printable.is_empty() {
            return Ok(LineChange::None);
        }
        self.replace_range(self.cursor..self.cursor, &printable)?;
        self.cursor += printable.len();
        self.follow_cursor();
        Ok(LineChange::Content)
    }

    // ==================== Deletion ====================

    /// Deletes the character before the cursor (Backspace).
    pub fn delete_backward(&mut self) -> LineChange {
        if self.cursor == 0 {
            return LineChange::None;
        }
        self.erase(self.cursor - 1..self.cursor)
    }

    /// Deletes the character at the cursor (Delete).
    pub fn delete_forward(&mut self) -> LineChange {
        if self.cursor == self.chars.len() {
            return LineChange::None;
        }
        self.erase(self.cursor..self.cursor + 1)
    }

    /// Erases everything before the cursor.
    pub fn kill_to_start(&mut self) -> LineChange {
        if self.cursor == 0 {
            return LineChange::None;
        }
        self.erase(0..self.cursor)
    }

    /// Truncates the query at the cursor.
    pub fn kill_to_end(&mut self) -> LineChange {
        if self.cursor == self.chars.len() {
            return LineChange::None;
        }
        self.erase(self.cursor..self.chars.len())
    }

    /// Deletes the word before the cursor, including any spaces between it
    /// and the cursor.
    pub fn delete_word_backward(&mut self) -> LineChange {
        let start = word_start_before(&self.chars, self.cursor);
        if start == self.cursor {
            return LineChange::None;
        }
        self.erase(start..self.cursor)
    }

    /// Deletes the word after the cursor, including any spaces between the
    /// cursor and it.
    pub fn delete_word_forward(&mut self) -> LineChange {
        let end = word_end_after(&self.chars, self.cursor);
        if end == self.cursor {
            return LineChange::None;
        }
        self.erase(self.cursor..end)
    }

    /// Empties the buffer and resets cursor and window.
    pub fn clear(&mut self) -> LineChange {
        let was_empty = self.chars.is_empty();
        self.chars.clear();
        self.cursor = 0;
        self.window.reset();
        if was_empty {
            LineChange::None
        } else {
            LineChange::Content
        }
    }

    // ==================== Motion ====================

    /// Moves the cursor one character left.
    pub fn move_left(&mut self) -> LineChange {
        if self.cursor == 0 {
            return LineChange::None;
        }
        self.move_cursor_to(self.cursor - 1)
    }

    /// Moves the cursor one character right.
    pub fn move_right(&mut self) -> LineChange {
        if self.cursor == self.chars.len() {
            return LineChange::None;
        }
        self.move_cursor_to(self.cursor + 1)
    }

    /// Moves the cursor to the start; the window becomes `[0, min(width, len))`.
    pub fn move_to_start(&mut self) -> LineChange {
        let moved = self.cursor != 0 || self.window.start() != 0;
        self.cursor = 0;
        self.window.reset();
        if moved {
            LineChange::Cursor
        } else {
            LineChange::None
        }
    }

    /// Moves the cursor to the end; the window becomes `[max(0, len - width), len)`.
    pub fn move_to_end(&mut self) -> LineChange {
        let len = self.chars.len();
        let before = (self.cursor, self.window.start());
        self.cursor = len;
        self.window.reset();
        self.window.ensure_caret_visible(len);
        if before == (self.cursor, self.window.start()) {
            LineChange::None
        } else {
            LineChange::Cursor
        }
    }

    /// Moves the cursor to the start of the previous word.
    pub fn move_word_left(&mut self) -> LineChange {
        let target = word_start_before(&self.chars, self.cursor);
        self.move_cursor_to(target)
    }

    /// Moves the cursor to the end of the next word.
    pub fn move_word_right(&mut self) -> LineChange {
        let target = word_end_after(&self.chars, self.cursor);
        self.move_cursor_to(target)
    }

    // ==================== Internals ====================

    /// Removes `range` and leaves the cursor at its start.
    fn erase(&mut self, range: Range<usize>) -> LineChange {
        let start = range.start;
        if self.replace_range(range, &[]).is_err() {
            // Ranges are derived from the cursor and length, so this cannot happen.
            return LineChange::None;
        }
        self.cursor = start;
        self.follow_cursor();
        LineChange::Content
    }

    fn move_cursor_to(&mut self, pos: usize) -> LineChange {
        if pos == self.cursor {
            return LineChange::None;
        }
        self.cursor = pos;
        self.follow_cursor();
        LineChange::Cursor
    }

    /// Applies the scroll-follow rule, then keeps the window filled.
    fn follow_cursor(&mut self) {
        self.window.ensure_caret_visible(self.cursor);
        self.window.clamp_to_len(self.chars.len());
    }
}

/// Returns the index where the word before `pos` starts.
///
/// Skips the run of whitespace immediately before `pos`, then the run of
/// non-whitespace before that.
fn word_start_before(chars: &[char], pos: usize) -> usize {
    let mut i = pos.min(chars.len());
    while i > 0 && chars[i - 1].is_whitespace() {
        i -= 1;
    }
    while i > 0 && !chars[i - 1].is_whitespace() {
        i -= 1;
    }
    i
}

/// Returns the index where the word after `pos` ends.
///
/// Skips the run of whitespace immediately after `pos`, then the run of
/// non-whitespace after that.
fn word_end_after(chars: &[char], pos: usize) -> usize {
    let mut i = pos.min(chars.len());
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    while i < chars.len() && !chars[i].is_whitespace() {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_with(text: &str, capacity: usize, width: usize) -> LineBuffer {
        let mut buf = LineBuffer::new(capacity, width);
        buf.insert_str(text).unwrap();
        buf
    }

    fn assert_window_invariant(buf: &LineBuffer) {
        let window = buf.window();
        assert!(window.start <= buf.cursor() && buf.cursor() <= window.end);
        if buf.len() >= buf.display_width() {
            assert_eq!(window.len(), buf.display_width());
        } else {
            assert_eq!(window.start, 0);
        }
    }

    // ==================== Construction ====================

    #[test]
    fn test_new_is_empty() {
        let buf = LineBuffer::new(16, 8);
        assert!(buf.is_empty());
        assert_eq!(buf.cursor(), 0);
        assert_eq!(buf.window(), 0..0);
        assert_eq!(buf.capacity(), 16);
        assert_eq!(buf.display_width(), 8);
    }

    // ==================== replace_range ====================

    #[test]
    fn test_replace_range_out_of_bounds() {
        let mut buf = buffer_with("abc", 16, 8);
        let err = buf.replace_range(2..5, &[]).unwrap_err();
        assert_eq!(err, BufferError::OutOfBounds { start: 2, end: 5, len: 3 });
        assert_eq!(buf.text(), "abc");
    }

    #[test]
    fn test_replace_range_over_capacity_leaves_buffer() {
        let mut buf = buffer_with("abc", 4, 8);
        let err = buf.replace_range(1..1, &['x', 'y']).unwrap_err();
        assert_eq!(err, BufferError::CapacityExceeded { capacity: 4 });
        assert_eq!(buf.text(), "abc");
    }

    #[test]
    fn test_replace_range_same_length_at_capacity() {
        let mut buf = buffer_with("abcd", 4, 8);
        buf.replace_range(1..3, &['x', 'y']).unwrap();
        assert_eq!(buf.text(), "axyd");
    }

    // ==================== insert_char ====================

    #[test]
    fn test_insert_char_at_cursor() {
        let mut buf = buffer_with("ac", 16, 8);
        buf.move_left();
        assert_eq!(buf.insert_char('b'), Ok(LineChange::Content));
        assert_eq!(buf.text(), "abc");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_insert_char_full_buffer_rejected() {
        let mut buf = buffer_with("abc", 3, 8);
        assert_eq!(
            buf.insert_char('d'),
            Err(BufferError::CapacityExceeded { capacity: 3 })
        );
        assert_eq!(buf.text(), "abc");
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn test_insert_control_char_rejected() {
        let mut buf = LineBuffer::new(16, 8);
        assert_eq!(buf.insert_char('\t'), Err(BufferError::Unprintable('\t')));
        assert_eq!(buf.insert_char('\n'), Err(BufferError::Unprintable('\n')));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_insert_unicode() {
        let mut buf = LineBuffer::new(16, 8);
        buf.insert_char('日').unwrap();
        buf.insert_char('本').unwrap();
        assert_eq!(buf.text(), "日本");
        assert_eq!(buf.len(), 2);
    }

    // ==================== insert_str ====================

    #[test]
    fn test_insert_str_drops_control_chars() {
        let mut buf = LineBuffer::new(16, 8);
        assert_eq!(buf.insert_str("ls\n-la\t"), Ok(LineChange::Content));
        assert_eq!(buf.text(), "ls-la");
    }

    #[test]
    fn test_insert_str_all_or_nothing() {
        let mut buf = buffer_with("abc", 5, 8);
        assert_eq!(
            buf.insert_str("xyz"),
            Err(BufferError::CapacityExceeded { capacity: 5 })
        );
        assert_eq!(buf.text(), "abc");
    }

    #[test]
    fn test_insert_str_only_control_chars_is_noop() {
        let mut buf = LineBuffer::new(16, 8);
        assert_eq!(buf.insert_str("\n\n"), Ok(LineChange::None));
    }

    // ==================== delete_backward / delete_forward ====================

    #[test]
    fn test_delete_backward_at_start_is_noop() {
        let mut buf = buffer_with("abc", 16, 8);
        buf.move_to_start();
        assert_eq!(buf.delete_backward(), LineChange::None);
        assert_eq!(buf.text(), "abc");
    }

    #[test]
    fn test_delete_backward_mid_line() {
        let mut buf = buffer_with("abc", 16, 8);
        buf.move_left();
        assert_eq!(buf.delete_backward(), LineChange::Content);
        assert_eq!(buf.text(), "ac");
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn test_delete_forward_at_end_is_noop() {
        let mut buf = buffer_with("abc", 16, 8);
        assert_eq!(buf.delete_forward(), LineChange::None);
    }

    #[test]
    fn test_delete_forward_mid_line() {
        let mut buf = buffer_with("abc", 16, 8);
        buf.move_to_start();
        assert_eq!(buf.delete_forward(), LineChange::Content);
        assert_eq!(buf.text(), "bc");
        assert_eq!(buf.cursor(), 0);
    }

    // ==================== kill ====================

    #[test]
    fn test_kill_to_start() {
        let mut buf = buffer_with("hello world", 32, 8);
        for _ in 0..5 {
            buf.move_left();
        }
        assert_eq!(buf.kill_to_start(), LineChange::Content);
        assert_eq!(buf.text(), "world");
        assert_eq!(buf.cursor(), 0);
        assert_window_invariant(&buf);
    }

    #[test]
    fn test_kill_to_end() {
        let mut buf = buffer_with("hello world", 32, 8);
        buf.move_to_start();
        for _ in 0..5 {
            buf.move_right();
        }
        assert_eq!(buf.kill_to_end(), LineChange::Content);
        assert_eq!(buf.text(), "hello");
        assert_eq!(buf.cursor(), 5);
        assert_eq!(buf.kill_to_end(), LineChange::None);
    }

    // ==================== words ====================

    #[test]
    fn test_delete_word_backward_skips_trailing_spaces() {
        let mut buf = buffer_with("git commit   ", 32, 32);
        assert_eq!(buf.delete_word_backward(), LineChange::Content);
        assert_eq!(buf.text(), "git ");
    }

    #[test]
    fn test_delete_word_backward_at_start_is_noop() {
        let mut buf = buffer_with("git", 32, 32);
        buf.move_to_start();
        assert_eq!(buf.delete_word_backward(), LineChange::None);
    }

    #[test]
    fn test_delete_word_forward() {
        let mut buf = buffer_with("ls  -la /tmp", 32, 32);
        buf.move_to_start();
        buf.move_word_right();
        assert_eq!(buf.cursor(), 2);
        assert_eq!(buf.delete_word_forward(), LineChange::Content);
        assert_eq!(buf.text(), "ls /tmp");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_move_word_left_and_right() {
        let mut buf = buffer_with("one two  three", 32, 32);
        assert_eq!(buf.move_word_left(), LineChange::Cursor);
        assert_eq!(buf.cursor(), 9);
        buf.move_word_left();
        assert_eq!(buf.cursor(), 4);
        buf.move_word_left();
        assert_eq!(buf.cursor(), 0);
        assert_eq!(buf.move_word_left(), LineChange::None);

        buf.move_word_right();
        assert_eq!(buf.cursor(), 3);
        buf.move_word_right();
        assert_eq!(buf.cursor(), 7);
        buf.move_word_right();
        assert_eq!(buf.cursor(), 14);
        assert_eq!(buf.move_word_right(), LineChange::None);
    }

    // ==================== window ====================

    #[test]
    fn test_window_follows_typing() {
        let mut buf = LineBuffer::new(64, 5);
        for ch in "abcdefgh".chars() {
            buf.insert_char(ch).unwrap();
            assert_window_invariant(&buf);
        }
        assert_eq!(buf.window(), 3..8);
        assert_eq!(buf.visible_text(), "defgh");
        assert_eq!(buf.cursor_column(), 5);
    }

    #[test]
    fn test_window_shifts_minimally_on_left_motion() {
        let mut buf = buffer_with("abcdefgh", 64, 5);
        for _ in 0..5 {
            buf.move_left();
        }
        // Cursor at 3 is still the left edge of [3, 8)
        assert_eq!(buf.window(), 3..8);
        buf.move_left();
        assert_eq!(buf.window(), 2..7);
        assert_eq!(buf.cursor_column(), 0);
    }

    #[test]
    fn test_move_to_start_and_end_reset_window() {
        let mut buf = buffer_with("abcdefgh", 64, 5);
        assert_eq!(buf.move_to_start(), LineChange::Cursor);
        assert_eq!(buf.window(), 0..5);
        assert_eq!(buf.move_to_start(), LineChange::None);
        assert_eq!(buf.move_to_end(), LineChange::Cursor);
        assert_eq!(buf.window(), 3..8);
        assert_eq!(buf.move_to_end(), LineChange::None);
    }

    #[test]
    fn test_window_refills_after_deleting_at_end() {
        let mut buf = buffer_with("abcdefgh", 64, 5);
        buf.delete_backward();
        assert_eq!(buf.window(), 2..7);
        assert_window_invariant(&buf);
    }

    #[test]
    fn test_window_short_line_starts_at_zero() {
        let mut buf = buffer_with("abcdefgh", 64, 5);
        buf.kill_to_start();
        assert_eq!(buf.window(), 0..0);
        buf.insert_str("xy").unwrap();
        assert_eq!(buf.window(), 0..2);
        assert_window_invariant(&buf);
    }

    // ==================== clear ====================

    #[test]
    fn test_clear() {
        let mut buf = buffer_with("abcdefgh", 64, 5);
        assert_eq!(buf.clear(), LineChange::Content);
        assert!(buf.is_empty());
        assert_eq!(buf.cursor(), 0);
        assert_eq!(buf.window(), 0..0);
        assert_eq!(buf.clear(), LineChange::None);
    }
}

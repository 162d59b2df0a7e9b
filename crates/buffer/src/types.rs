// Chunk: docs/chunks/line_buffer - Capacity-checked single-line query buffer

/// What a line buffer operation changed.
///
/// Returned by every [`LineBuffer`](crate::LineBuffer) operation so callers can
/// decide whether to re-filter (content changed) or merely repaint the query
/// line (cursor or window moved).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineChange {
    /// Nothing changed (e.g. backspace at column 0, move-left at the start).
    #[default]
    None,
    /// Only the cursor (and possibly the visible window) moved.
    Cursor,
    /// The query text changed.
    Content,
}

impl LineChange {
    /// Returns true if nothing changed.
    pub fn is_none(&self) -> bool {
        matches!(self, LineChange::None)
    }

    /// Returns true if the query line needs repainting.
    pub fn is_changed(&self) -> bool {
        !self.is_none()
    }

    /// Returns true if the query text changed and the candidate list must be
    /// recomputed.
    pub fn query_changed(&self) -> bool {
        matches!(self, LineChange::Content)
    }
}

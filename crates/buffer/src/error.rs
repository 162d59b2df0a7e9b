// Chunk: docs/chunks/line_buffer - Capacity-checked single-line query buffer

use thiserror::Error;

/// Reasons a line buffer mutation is rejected.
///
/// A rejected mutation leaves the buffer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// The edit would grow the query past its fixed capacity.
    #[error("query would exceed its capacity of {capacity} characters")]
    CapacityExceeded { capacity: usize },

    /// The character cannot be typed into the query (control characters).
    #[error("character {0:?} is not printable")]
    Unprintable(char),

    /// The edit range does not lie within the current content.
    #[error("range {start}..{end} is out of bounds for length {len}")]
    OutOfBounds { start: usize, end: usize, len: usize },
}

// Chunk: docs/chunks/line_buffer - Capacity-checked single-line query buffer
// Chunk: docs/chunks/sliding_window - Shared bounded window over an indexable sequence

//! arun-buffer: the query line buffer for the arun launcher.
//!
//! This crate provides a capacity-checked, single-line character buffer with
//! cursor tracking and a horizontally scrolling visible window, plus the
//! [`SlidingWindow`] arithmetic it shares with the candidate list.
//!
//! # Overview
//!
//! The main type is [`LineBuffer`], which provides:
//! - Character insertion and deletion at the cursor position
//! - Word-wise motion and deletion, kill to start / end
//! - A fixed-width visible window that follows the cursor
//! - Change reporting so callers know when to re-filter
//!
//! # Example
//!
//! ```
//! use arun_buffer::{LineBuffer, LineChange};
//!
//! let mut line = LineBuffer::new(256, 25);
//!
//! let change = line.insert_str("firefox").unwrap();
//! assert_eq!(change, LineChange::Content);
//! assert_eq!(line.text(), "firefox");
//!
//! // Cursor motion never changes the query
//! assert_eq!(line.move_to_start(), LineChange::Cursor);
//! assert!(!line.move_left().query_changed());
//! ```
//!
//! # Change Tracking
//!
//! Each operation returns a [`LineChange`]:
//!
//! - `LineChange::None` - No visible change (e.g. backspace at column 0)
//! - `LineChange::Cursor` - Only the cursor or window moved
//! - `LineChange::Content` - The query text changed; candidates must be refiltered

mod error;
mod line_buffer;
mod types;
mod window;

pub use error::BufferError;
pub use line_buffer::LineBuffer;
pub use types::LineChange;
pub use window::SlidingWindow;

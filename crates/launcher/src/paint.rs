// Chunk: docs/chunks/redraw_planning - Full / partial / no repaint decisions
//!
//! Paint content handed to a renderer.
//!
//! A [`Frame`] is the authoritative description of what changed on screen:
//! the visible slice of the query line (when it changed) and the candidate
//! rows the [`RedrawDecision`] covers. Renderers translate it to terminal
//! output (or pixels) and never consult launcher state directly.

use arun_buffer::LineBuffer;

use crate::candidate_viewport::CandidateViewport;
use crate::redraw::RedrawDecision;

/// The visible part of the query and where the cursor sits in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryLine {
    /// The characters inside the text window
    pub text: String,
    /// Cursor position in characters from the start of `text`
    pub cursor_column: usize,
}

impl QueryLine {
    pub fn from_buffer(line: &LineBuffer) -> Self {
        Self {
            text: line.visible_text(),
            cursor_column: line.cursor_column(),
        }
    }
}

/// What a candidate row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowContent<'u> {
    Candidate { text: &'u str, highlighted: bool },
    /// A row past the end of the drawable list; must be cleared explicitly
    Blank,
}

/// One candidate row to repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintRow<'u> {
    /// Row offset from the top of the list, in `[0, page_size)`
    pub screen_row: usize,
    pub content: RowContent<'u>,
}

/// Everything a renderer needs to bring the screen up to date.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame<'u> {
    pub list: RedrawDecision,
    /// The query line, if it must be repainted
    pub line: Option<QueryLine>,
    /// Candidate rows to repaint, as selected by `list`
    pub rows: Vec<PaintRow<'u>>,
}

impl<'u> Frame<'u> {
    /// Returns true if the frame repaints nothing.
    pub fn is_empty(&self) -> bool {
        self.line.is_none() && self.rows.is_empty()
    }
}

/// Builds the rows a decision covers.
///
/// `Full` yields exactly `page_size` rows, blank past the end of the drawable
/// list. `Partial` yields the listed indices that are on screen. `None` yields
/// nothing.
pub fn rows<'u>(decision: &RedrawDecision, candidates: &CandidateViewport<'u>) -> Vec<PaintRow<'u>> {
    match decision {
        RedrawDecision::None => Vec::new(),
        RedrawDecision::Full => (0..candidates.page_size())
            .map(|screen_row| PaintRow {
                screen_row,
                content: match candidates.index_at_row(screen_row) {
                    Some(index) => candidate_content(candidates, index),
                    None => RowContent::Blank,
                },
            })
            .collect(),
        RedrawDecision::Partial { rows } => rows
            .iter()
            .filter_map(|&index| {
                let screen_row = candidates.screen_row(index)?;
                Some(PaintRow {
                    screen_row,
                    content: candidate_content(candidates, index),
                })
            })
            .collect(),
    }
}

fn candidate_content<'u>(candidates: &CandidateViewport<'u>, index: usize) -> RowContent<'u> {
    match candidates.candidate(index) {
        Some(text) => RowContent::Candidate {
            text,
            highlighted: candidates.selection() == Some(index),
        },
        None => RowContent::Blank,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate_source::Universe;

    #[test]
    fn test_full_pads_with_blank_rows() {
        let universe = Universe::new(["cat", "cp"]);
        let viewport = CandidateViewport::new(&universe, 4);
        let rows = rows(&RedrawDecision::Full, &viewport);
        assert_eq!(rows.len(), 4);
        assert_eq!(
            rows[0].content,
            RowContent::Candidate {
                text: "cat",
                highlighted: true
            }
        );
        assert_eq!(
            rows[1].content,
            RowContent::Candidate {
                text: "cp",
                highlighted: false
            }
        );
        assert_eq!(rows[2].content, RowContent::Blank);
        assert_eq!(rows[3].screen_row, 3);
        assert_eq!(rows[3].content, RowContent::Blank);
    }

    #[test]
    fn test_full_on_empty_list_is_all_blank() {
        let universe = Universe::default();
        let viewport = CandidateViewport::new(&universe, 3);
        let rows = rows(&RedrawDecision::Full, &viewport);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.content == RowContent::Blank));
    }

    #[test]
    fn test_partial_maps_indices_through_window() {
        let universe = Universe::new(["a", "b", "c", "d", "e"]);
        let mut viewport = CandidateViewport::new(&universe, 2);
        viewport.select_next();
        viewport.select_next();
        viewport.select_next();
        assert_eq!(viewport.window(), 2..4);

        let decision = RedrawDecision::Partial { rows: vec![3, 2, 0] };
        let rows = rows(&decision, &viewport);
        // Index 0 is scrolled out of view and skipped
        assert_eq!(
            rows,
            vec![
                PaintRow {
                    screen_row: 1,
                    content: RowContent::Candidate {
                        text: "d",
                        highlighted: true
                    }
                },
                PaintRow {
                    screen_row: 0,
                    content: RowContent::Candidate {
                        text: "c",
                        highlighted: false
                    }
                },
            ]
        );
    }

    #[test]
    fn test_none_has_no_rows() {
        let universe = Universe::new(["a"]);
        let viewport = CandidateViewport::new(&universe, 2);
        assert!(rows(&RedrawDecision::None, &viewport).is_empty());
    }

    #[test]
    fn test_query_line_shows_window() {
        let mut line = LineBuffer::new(64, 4);
        line.insert_str("abcdef").unwrap();
        let query = QueryLine::from_buffer(&line);
        assert_eq!(query.text, "cdef");
        assert_eq!(query.cursor_column, 4);
    }
}

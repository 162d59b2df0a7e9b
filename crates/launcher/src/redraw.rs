// Chunk: docs/chunks/redraw_planning - Full / partial / no repaint decisions
//!
//! Redraw planning for the candidate list.
//!
//! This module provides [`RedrawDecision`], which says how much of the
//! candidate list must be repainted after an event, and [`RedrawPlanner`], the
//! state machine that produces it. The planner's transition table is the
//! single source of truth for what the renderer repaints:
//!
//! | Transition                          | Decision                          |
//! |-------------------------------------|-----------------------------------|
//! | first expose (and every expose)     | `Full`                            |
//! | query changed                       | `Full`                            |
//! | navigation crossed the window edge  | `Full`                            |
//! | navigation within the window        | `Partial { selection, previous }` |
//! | no drawable or selection change     | `None`                            |
//!
//! Before the first expose nothing is on screen, so every other transition
//! yields `None` and the first expose paints the current state in full.

/// How much of the candidate list must be repainted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RedrawDecision {
    /// Nothing in the list changed
    #[default]
    None,
    /// Only the highlight of these drawable indices changed; row positions did not
    Partial { rows: Vec<usize> },
    /// Every visible row must be repainted (positions or contents changed)
    Full,
}

impl RedrawDecision {
    /// Returns true if no row needs repainting.
    pub fn is_none(&self) -> bool {
        matches!(self, RedrawDecision::None)
    }

    /// Returns true if any row needs repainting.
    pub fn is_dirty(&self) -> bool {
        !self.is_none()
    }

    /// Creates a partial decision over a selection change.
    pub fn selection_change(selection: usize, previous: usize) -> Self {
        RedrawDecision::Partial {
            rows: vec![selection, previous],
        }
    }

    /// Merges another decision into this one, producing the smallest decision
    /// that covers both.
    ///
    /// # Merge semantics:
    /// - `None` is the identity element
    /// - `Any + Full → Full`
    /// - `Partial(a) + Partial(b) → Partial(a ∪ b)`
    pub fn merge(&mut self, other: RedrawDecision) {
        *self = match (std::mem::take(self), other) {
            (RedrawDecision::None, other) => other,
            (this, RedrawDecision::None) => this,
            (RedrawDecision::Full, _) | (_, RedrawDecision::Full) => RedrawDecision::Full,
            (RedrawDecision::Partial { mut rows }, RedrawDecision::Partial { rows: more }) => {
                for row in more {
                    if !rows.contains(&row) {
                        rows.push(row);
                    }
                }
                RedrawDecision::Partial { rows }
            }
        };
    }
}

/// Result of a navigation request on the candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The selection did not move (empty list, or already at the boundary)
    Unchanged,
    /// The selection moved from `previous` to `selection`
    Moved {
        selection: usize,
        previous: usize,
        /// True if the list window had to shift to keep the selection visible
        scrolled: bool,
    },
}

/// A state transition fed to the planner, one per processed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The surface became visible or was resized
    Expose,
    /// The query changed and the drawable list was recomputed
    QueryChanged,
    /// The selection was asked to move
    Navigated(Navigation),
    /// Neither the drawable list nor the selection changed
    Unchanged,
}

/// What the last processed frame did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlannerState {
    /// Nothing has been exposed yet
    #[default]
    Startup,
    /// The last frame recomputed the drawable list
    Filtering,
    /// The last frame moved the selection
    Navigating,
    /// The last frame changed nothing in the list
    Idle,
}

/// Decides a [`RedrawDecision`] per transition.
#[derive(Debug, Clone, Default)]
pub struct RedrawPlanner {
    state: PlannerState,
}

impl RedrawPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state after the last planned transition.
    pub fn state(&self) -> PlannerState {
        self.state
    }

    /// Returns true once the surface has been exposed at least once.
    pub fn is_exposed(&self) -> bool {
        self.state != PlannerState::Startup
    }

    /// Plans the repaint for one transition and advances the state.
    pub fn plan(&mut self, transition: Transition) -> RedrawDecision {
        if self.state == PlannerState::Startup && transition != Transition::Expose {
            return RedrawDecision::None;
        }

        let (state, decision) = match transition {
            Transition::Expose => (PlannerState::Idle, RedrawDecision::Full),
            Transition::QueryChanged => (PlannerState::Filtering, RedrawDecision::Full),
            Transition::Navigated(Navigation::Moved {
                selection,
                previous,
                scrolled,
            }) => {
                let decision = if scrolled {
                    RedrawDecision::Full
                } else {
                    RedrawDecision::selection_change(selection, previous)
                };
                (PlannerState::Navigating, decision)
            }
            Transition::Navigated(Navigation::Unchanged) | Transition::Unchanged => {
                (PlannerState::Idle, RedrawDecision::None)
            }
        };

        tracing::trace!(from = ?self.state, to = ?state, ?decision, "planned redraw");
        self.state = state;
        decision
    }
}

/// Everything that must be repainted after one event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Redraw {
    /// Candidate list repaint
    pub list: RedrawDecision,
    /// True if the query line (text, cursor or window) changed
    pub line: bool,
}

impl Redraw {
    /// Returns true if anything needs repainting.
    pub fn is_dirty(&self) -> bool {
        self.line || self.list.is_dirty()
    }
}

// Chunk: docs/chunks/candidate_filter - Substring filter over the universe
//!
//! The filter engine: one linear scan of the universe per query edit.
//!
//! A candidate is kept iff it contains the query as a contiguous,
//! case-sensitive substring. The universe is pre-sorted, so the result is
//! sorted too. The result borrows from the universe.

use crate::candidate_source::Universe;

/// Recomputes the drawable list for `query`.
///
/// The empty query keeps every candidate.
pub fn recompute<'u>(universe: &'u Universe, query: &str) -> Vec<&'u str> {
    universe
        .iter()
        .filter(|candidate| candidate.contains(query))
        .collect()
}

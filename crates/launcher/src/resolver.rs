// Chunk: docs/chunks/launcher_core - Query editing, filtering and selection core
//!
//! Commit-time choice between the highlighted candidate and the typed line.

use crate::candidate_viewport::CandidateViewport;

/// The command chosen at commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'u> {
    /// The highlighted candidate, which contains the query
    Candidate(&'u str),
    /// The query exactly as typed
    RawQuery(String),
}

impl<'u> Resolution<'u> {
    /// Returns the command string to hand to the process launcher.
    pub fn command(&self) -> &str {
        match self {
            Resolution::Candidate(candidate) => candidate,
            Resolution::RawQuery(query) => query,
        }
    }

    pub fn into_command(self) -> String {
        match self {
            Resolution::Candidate(candidate) => candidate.to_owned(),
            Resolution::RawQuery(query) => query,
        }
    }
}

/// Picks the command to run for `query`.
///
/// The highlighted candidate wins when it contains the query as a substring.
/// Otherwise (no candidates, or the user typed arguments past a command
/// name) the query runs verbatim.
pub fn resolve<'u>(query: &str, candidates: &CandidateViewport<'u>) -> Resolution<'u> {
    match candidates.selected() {
        Some(candidate) if candidate.contains(query) => Resolution::Candidate(candidate),
        _ => Resolution::RawQuery(query.to_owned()),
    }
}

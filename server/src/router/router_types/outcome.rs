//! Result of a cheapest-path query.
use serde::Serialize;

use super::candidate::Candidate;

/// Every query produces exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// The cheapest path between the two labels.
    Found(Candidate),

    /// The search completed without reaching the destination.
    NoRoute,

    /// Origin and destination are the same label; nothing was searched.
    IdenticalEndpoints,

    /// A configured expansion ceiling stopped the search before it
    /// finished. Never produced when no ceiling is set.
    SearchAborted,
}

impl Outcome {
    /// Returns the winning candidate, if any.
    pub fn candidate(&self) -> Option<&Candidate> {
        match self {
            Outcome::Found(candidate) => Some(candidate),
            _ => None,
        }
    }
}

//! Picks the winning candidate.

use crate::router::router_types::candidate::Candidate;

/// Returns the candidate with the lowest total cost.
///
/// When several candidates share the lowest cost the one enumerated first
/// wins; candidates are never re-ordered by path content or length.
/// Returns `None` for an empty list.
pub fn select_cheapest(candidates: Vec<Candidate>) -> Option<Candidate> {
    // min_by_key keeps the first of equal minima
    candidates.into_iter().min_by_key(|candidate| candidate.total_cost)
}

//! Definition of the `Candidate` type.
use serde::Serialize;

use super::edge::Cost;

/// A complete simple path from the query origin to the query destination,
/// tagged with the sum of the edge costs used to walk it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Labels in travel order. No label appears twice.
    pub path: Vec<String>,

    /// Sum of the traversed edge costs.
    pub total_cost: Cost,
}

impl Candidate {
    /// Number of segments in the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

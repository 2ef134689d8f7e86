//! Definition of the `Edge` type.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The weight of a route segment.
///
/// Decimal, so that sums of fractional prices compare exactly and equal
/// totals tie.
pub type Cost = Decimal;

/// An edge is a directed route segment between two labels.
/// The cost represents the "weight" of the edge.
///
/// Labels are opaque and case-sensitive. Parallel edges between the same
/// pair of labels are legal and each takes part in the search.
#[derive(Debug, Clone, PartialEq, Hash, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Where the segment starts.
    pub origin: String,

    /// Where the segment ends.
    pub destination: String,

    /// The weight of the edge.
    pub cost: Cost,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, cost: Cost) -> Self {
        Edge {
            origin: origin.into(),
            destination: destination.into(),
            cost,
        }
    }
}

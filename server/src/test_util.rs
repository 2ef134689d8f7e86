//! Shared helpers for unit tests.

log_macros!("test::ut", ut_debug, ut_info, ut_warn, ut_error);

use crate::router::Edge;
use crate::store::DEFAULT_ROUTES;

/// Owned labels, for comparing against candidate paths.
pub fn labels(path: &[&str]) -> Vec<String> {
    path.iter().map(|label| label.to_string()).collect()
}

/// The demonstration route table as edges, in table order.
pub fn seed_edges() -> Vec<Edge> {
    DEFAULT_ROUTES
        .iter()
        .map(|(origin, destination, cost)| Edge::new(*origin, *destination, *cost))
        .collect()
}

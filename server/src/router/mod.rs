//! Router module
//!
//! Cheapest-path search over the route table.

log_macros!(
    "app::router",
    router_debug,
    router_info,
    router_warn,
    router_error
);

pub mod router_types;
pub mod router_utils;

pub use router_types::{
    candidate::Candidate,
    edge::{Cost, Edge},
    outcome::Outcome,
    router::engine::{find_cheapest_path, Router, RouterError, SearchLimits},
};
pub use router_utils::formatter::{CostFormat, ResultFormatter};

use crate::store::{RouteStore, StoreError};

/// Errors raised while answering a best-route query.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BestPathError {
    /// The route store could not be read.
    ClientError(StoreError),
}

impl std::fmt::Display for BestPathError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BestPathError::ClientError(e) => write!(f, "Client error: {e}"),
        }
    }
}

impl std::error::Error for BestPathError {}

/// Get the cheapest path between two labels over the current contents of
/// the route store.
///
/// Identical labels are answered before the store is read. Otherwise the
/// store is scanned once and the search runs over that snapshot only.
pub async fn best_route(
    store: &dyn RouteStore,
    origin: &str,
    destination: &str,
    limits: SearchLimits,
) -> Result<Outcome, BestPathError> {
    if origin == destination {
        router_debug!("(best_route) origin and destination are both [{}].", origin);
        return Ok(Outcome::IdenticalEndpoints);
    }

    let edges: Vec<Edge> = match store.list().await {
        Ok(records) => records.iter().map(Edge::from).collect(),
        Err(e) => {
            router_error!("(best_route) Failed to list routes: {e}");
            return Err(BestPathError::ClientError(e));
        }
    };
    router_debug!("(best_route) searching over {} edges.", edges.len());

    let outcome = Router::new(&edges).find_cheapest_path(origin, destination, limits);
    router_info!(
        "(best_route) [{}] -> [{}]: {:?}",
        origin,
        destination,
        outcome
    );
    Ok(outcome)
}

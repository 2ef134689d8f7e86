//! This module contains the gRPC best_route endpoint implementation.

use rust_decimal::Decimal;
use tonic::{Request, Response, Status};

use super::MISSING_LABEL_MESSAGE;
use crate::grpc::server::grpc_server::{BestRouteOutcome, BestRouteRequest, BestRouteResponse};
use crate::router::{self, Outcome, ResultFormatter, SearchLimits};
use crate::store::RouteStore;

impl From<&Outcome> for BestRouteOutcome {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Found(_) => BestRouteOutcome::Found,
            Outcome::NoRoute => BestRouteOutcome::NoRoute,
            Outcome::IdenticalEndpoints => BestRouteOutcome::IdenticalEndpoints,
            Outcome::SearchAborted => BestRouteOutcome::SearchAborted,
        }
    }
}

/// Finds the cheapest path between two labels over the current route
/// table and renders it with `formatter`.
pub async fn best_route(
    store: &dyn RouteStore,
    formatter: &ResultFormatter,
    limits: SearchLimits,
    request: Request<BestRouteRequest>,
) -> Result<Response<BestRouteResponse>, Status> {
    let request = request.into_inner();
    if request.origin.is_empty() || request.destination.is_empty() {
        grpc_warn!("(best_route) missing origin or destination: {:?}", request);
        return Err(Status::invalid_argument(MISSING_LABEL_MESSAGE));
    }

    let outcome = router::best_route(store, &request.origin, &request.destination, limits)
        .await
        .map_err(|e| Status::internal(e.to_string()))?;

    let (path, total_cost) = match &outcome {
        Outcome::Found(candidate) => (candidate.path.clone(), candidate.total_cost),
        _ => (vec![], Decimal::ZERO),
    };

    let response = BestRouteResponse {
        outcome: BestRouteOutcome::from(&outcome) as i32,
        message: formatter.render(&outcome),
        path,
        total_cost: total_cost.to_string(),
    };
    grpc_debug!("(best_route) response: {:?}", response);
    Ok(Response::new(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::router_utils::formatter::{
        IDENTICAL_ENDPOINTS_MESSAGE, NO_ROUTE_MESSAGE, SEARCH_ABORTED_MESSAGE,
    };
    use crate::router::CostFormat;
    use crate::store::{MemoryStore, DEFAULT_ROUTES};
    use crate::test_util::labels;
    use tonic::Code;

    async fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        store.seed(DEFAULT_ROUTES).await.unwrap();
        store
    }

    fn request(origin: &str, destination: &str) -> Request<BestRouteRequest> {
        Request::new(BestRouteRequest {
            origin: origin.to_string(),
            destination: destination.to_string(),
        })
    }

    #[tokio::test]
    async fn test_best_route_found() {
        crate::get_log_handle().await;
        ut_info!("(test_best_route_found) Start.");

        let store = seeded_store().await;
        let response = best_route(
            &store,
            &ResultFormatter::default(),
            SearchLimits::UNLIMITED,
            request("GRU", "CDG"),
        )
        .await
        .unwrap()
        .into_inner();

        assert_eq!(response.outcome, BestRouteOutcome::Found as i32);
        assert_eq!(response.message, "GRU - BRC - SCL - ORL - CDG ao custo de $40");
        assert_eq!(response.path, labels(&["GRU", "BRC", "SCL", "ORL", "CDG"]));
        assert_eq!(response.total_cost, "40");

        ut_info!("(test_best_route_found) Success.");
    }

    #[tokio::test]
    async fn test_best_route_decimal_format() {
        let store = seeded_store().await;
        let response = best_route(
            &store,
            &ResultFormatter::new(CostFormat::Decimal),
            SearchLimits::UNLIMITED,
            request("BRC", "CDG"),
        )
        .await
        .unwrap()
        .into_inner();

        assert_eq!(response.message, "BRC - SCL - ORL - CDG ao custo de 30,00");
        assert_eq!(response.total_cost, "30");
    }

    #[tokio::test]
    async fn test_best_route_fractional_tie() {
        let store = MemoryStore::new();
        store
            .seed(&[
                ("A", "B", Decimal::new(1, 1)),
                ("B", "C", Decimal::new(2, 1)),
                ("A", "C", Decimal::new(3, 1)),
            ])
            .await
            .unwrap();

        let response = best_route(
            &store,
            &ResultFormatter::new(CostFormat::Decimal),
            SearchLimits::UNLIMITED,
            request("A", "C"),
        )
        .await
        .unwrap()
        .into_inner();

        assert_eq!(response.path, labels(&["A", "B", "C"]));
        assert_eq!(response.total_cost, "0.3");
        assert_eq!(response.message, "A - B - C ao custo de 0,30");
    }

    #[tokio::test]
    async fn test_best_route_sentinels() {
        let store = seeded_store().await;
        let formatter = ResultFormatter::default();

        let response = best_route(&store, &formatter, SearchLimits::UNLIMITED, request("CDG", "GRU"))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.outcome, BestRouteOutcome::NoRoute as i32);
        assert_eq!(response.message, NO_ROUTE_MESSAGE);
        assert!(response.path.is_empty());
        assert_eq!(response.total_cost, "0");

        let response = best_route(&store, &formatter, SearchLimits::UNLIMITED, request("GRU", "GRU"))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.outcome, BestRouteOutcome::IdenticalEndpoints as i32);
        assert_eq!(response.message, IDENTICAL_ENDPOINTS_MESSAGE);

        let limits = SearchLimits {
            max_expansions: Some(1),
        };
        let response = best_route(&store, &formatter, limits, request("GRU", "CDG"))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.outcome, BestRouteOutcome::SearchAborted as i32);
        assert_eq!(response.message, SEARCH_ABORTED_MESSAGE);
    }

    #[tokio::test]
    async fn test_best_route_missing_labels() {
        let store = seeded_store().await;
        let formatter = ResultFormatter::default();

        for (origin, destination) in [("", "CDG"), ("GRU", ""), ("", "")] {
            let status = best_route(
                &store,
                &formatter,
                SearchLimits::UNLIMITED,
                request(origin, destination),
            )
            .await
            .unwrap_err();
            assert_eq!(status.code(), Code::InvalidArgument);
            assert_eq!(status.message(), MISSING_LABEL_MESSAGE);
        }
    }
}

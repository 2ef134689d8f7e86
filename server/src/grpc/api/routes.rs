//! This module contains the gRPC route table endpoint implementations.

use tonic::{Request, Response, Status};

use super::{parse_cost, parse_route_id, route_not_found, store_error_to_status};
use crate::grpc::server::grpc_server::{
    DeleteRouteResponse, Id, Route, RouteData, RouteList, RouteListRequest,
};
use crate::store::{RouteData as StoreRouteData, RouteRecord, RouteStore};

impl From<RouteRecord> for Route {
    fn from(record: RouteRecord) -> Self {
        Route {
            id: record.id.to_string(),
            origin: record.origin,
            destination: record.destination,
            cost: record.cost.to_string(),
        }
    }
}

impl TryFrom<RouteData> for StoreRouteData {
    type Error = Status;

    fn try_from(data: RouteData) -> Result<Self, Status> {
        let cost = parse_cost(&data.cost)?;
        Ok(StoreRouteData::new(data.origin, data.destination, cost))
    }
}

/// Lists every stored route in insertion order.
pub async fn get_routes(
    store: &dyn RouteStore,
    _request: Request<RouteListRequest>,
) -> Result<Response<RouteList>, Status> {
    let routes = store
        .list()
        .await
        .map_err(|e| store_error_to_status(e, None))?;

    grpc_debug!("(get_routes) returning {} routes.", routes.len());
    Ok(Response::new(RouteList {
        routes: routes.into_iter().map(Route::from).collect(),
    }))
}

/// Validates and stores a new route.
pub async fn insert_route(
    store: &dyn RouteStore,
    request: Request<RouteData>,
) -> Result<Response<Route>, Status> {
    let data = StoreRouteData::try_from(request.into_inner())?;
    let record = store
        .insert(data)
        .await
        .map_err(|e| store_error_to_status(e, None))?;

    grpc_info!(
        "(insert_route) stored [{}] -> [{}] with ID {}.",
        record.origin,
        record.destination,
        record.id
    );
    Ok(Response::new(record.into()))
}

/// Replaces the fields of an existing route.
pub async fn update_route(
    store: &dyn RouteStore,
    request: Request<Route>,
) -> Result<Response<Route>, Status> {
    let route = request.into_inner();
    let id = parse_route_id(&route.id)?;
    let cost = parse_cost(&route.cost)?;
    let data = StoreRouteData::new(route.origin, route.destination, cost);

    let record = store
        .update(&id, data)
        .await
        .map_err(|e| store_error_to_status(e, Some(&id)))?;

    grpc_info!("(update_route) route {} updated.", id);
    Ok(Response::new(record.into()))
}

/// Removes a route by id.
pub async fn delete_route(
    store: &dyn RouteStore,
    request: Request<Id>,
) -> Result<Response<DeleteRouteResponse>, Status> {
    let id = parse_route_id(&request.into_inner().id)?;

    let deleted = store
        .delete(&id)
        .await
        .map_err(|e| store_error_to_status(e, Some(&id)))?;
    if !deleted {
        return Err(route_not_found(&id));
    }

    grpc_info!("(delete_route) route {} removed.", id);
    Ok(Response::new(DeleteRouteResponse {
        id: id.to_string(),
        deleted,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, DEFAULT_ROUTES};
    use rust_decimal::Decimal;
    use tonic::Code;
    use uuid::Uuid;

    async fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        store.seed(DEFAULT_ROUTES).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_get_routes() {
        crate::get_log_handle().await;
        ut_info!("(test_get_routes) Start.");

        let store = seeded_store().await;
        let routes = get_routes(&store, Request::new(RouteListRequest {}))
            .await
            .unwrap()
            .into_inner()
            .routes;

        assert_eq!(routes.len(), DEFAULT_ROUTES.len());
        for (route, (origin, destination, cost)) in routes.iter().zip(DEFAULT_ROUTES) {
            assert_eq!(route.origin, *origin);
            assert_eq!(route.destination, *destination);
            assert_eq!(route.cost, cost.to_string());
            assert!(Uuid::parse_str(&route.id).is_ok());
        }

        ut_info!("(test_get_routes) Success.");
    }

    #[tokio::test]
    async fn test_insert_route() {
        let store = MemoryStore::new();
        let route = insert_route(
            &store,
            Request::new(RouteData {
                origin: "GRU".to_string(),
                destination: "CDG".to_string(),
                cost: "12.50".to_string(),
            }),
        )
        .await
        .unwrap()
        .into_inner();

        assert_eq!(route.origin, "GRU");
        assert_eq!(route.cost, "12.50");
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_insert_route_invalid() {
        let store = MemoryStore::new();
        let status = insert_route(
            &store,
            Request::new(RouteData {
                origin: "GRU".to_string(),
                destination: "".to_string(),
                cost: "12.5".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);

        let status = insert_route(
            &store,
            Request::new(RouteData {
                origin: "GRU".to_string(),
                destination: "CDG".to_string(),
                cost: "0.001".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_route() {
        let store = seeded_store().await;
        let first = store.list().await.unwrap()[0].clone();

        let route = update_route(
            &store,
            Request::new(Route {
                id: first.id.to_string(),
                origin: "GRU".to_string(),
                destination: "BRC".to_string(),
                cost: "3.25".to_string(),
            }),
        )
        .await
        .unwrap()
        .into_inner();
        assert_eq!(route.id, first.id.to_string());
        assert_eq!(route.cost, "3.25");
        assert_eq!(store.list().await.unwrap()[0].cost, Decimal::new(325, 2));
    }

    #[tokio::test]
    async fn test_update_route_errors() {
        let store = seeded_store().await;

        let status = update_route(
            &store,
            Request::new(Route {
                id: "abc".to_string(),
                origin: "GRU".to_string(),
                destination: "BRC".to_string(),
                cost: "3.25".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);

        let status = update_route(
            &store,
            Request::new(Route {
                id: Uuid::new_v4().to_string(),
                origin: "GRU".to_string(),
                destination: "BRC".to_string(),
                cost: "3.25".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(status.code(), Code::NotFound);
    }

    #[tokio::test]
    async fn test_delete_route() {
        let store = seeded_store().await;
        let first = store.list().await.unwrap()[0].clone();

        let response = delete_route(
            &store,
            Request::new(Id {
                id: first.id.to_string(),
            }),
        )
        .await
        .unwrap()
        .into_inner();
        assert_eq!(
            response,
            DeleteRouteResponse {
                id: first.id.to_string(),
                deleted: true,
            }
        );
        assert_eq!(store.list().await.unwrap().len(), DEFAULT_ROUTES.len() - 1);

        let status = delete_route(
            &store,
            Request::new(Id {
                id: first.id.to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(status.code(), Code::NotFound);
        assert_eq!(
            status.message(),
            format!("Rota com ID {} não encontrada.", first.id)
        );
    }

    #[tokio::test]
    async fn test_delete_route_invalid_id() {
        let store = MemoryStore::new();
        let status = delete_route(&store, Request::new(Id { id: "".to_string() }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
    }
}

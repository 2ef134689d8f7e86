//! gRPC API parent module

pub mod best_route;
pub mod routes;

use std::str::FromStr;

use rust_decimal::Decimal;
use tonic::Status;
use uuid::Uuid;

use crate::store::StoreError;

/// Message returned when a request leaves out a label.
pub const MISSING_LABEL_MESSAGE: &str = "Origem e destino são obrigatórios.";

/// Message returned when a route cost is rejected.
pub const INVALID_COST_MESSAGE: &str = "O custo deve ser de no mínimo 0,01.";

/// Parses a route id from a request.
fn parse_route_id(id: &str) -> Result<Uuid, Status> {
    Uuid::parse_str(id).map_err(|_| {
        grpc_warn!("(parse_route_id) invalid route ID [{}].", id);
        Status::invalid_argument("Invalid route ID.")
    })
}

/// Parses a decimal cost such as `"12.50"` from a request.
///
/// Only the syntax is checked here; the store enforces the lower bound.
fn parse_cost(cost: &str) -> Result<Decimal, Status> {
    Decimal::from_str(cost.trim()).map_err(|e| {
        grpc_warn!("(parse_cost) invalid cost [{}]: {}", cost, e);
        Status::invalid_argument(INVALID_COST_MESSAGE)
    })
}

/// Message returned when a route id is unknown.
fn route_not_found(id: &Uuid) -> Status {
    Status::not_found(format!("Rota com ID {id} não encontrada."))
}

/// Maps a store failure to the status returned to the caller.
fn store_error_to_status(error: StoreError, id: Option<&Uuid>) -> Status {
    match (error, id) {
        (StoreError::NotFound, Some(id)) => route_not_found(id),
        (StoreError::NotFound, None) => Status::not_found(error.to_string()),
        (StoreError::MissingLabel, _) => Status::invalid_argument(MISSING_LABEL_MESSAGE),
        (StoreError::InvalidCost, _) => Status::invalid_argument(INVALID_COST_MESSAGE),
        (StoreError::Unavailable, _) => Status::internal(error.to_string()),
    }
}

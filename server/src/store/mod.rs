//! Route table storage.
//!
//! The router only ever needs a full scan of the table; the remaining
//! operations back the CRUD endpoints. Nothing here is durable.

log_macros!("app::store", store_debug, store_info, store_warn, store_error);

mod memory;

pub use memory::MemoryStore;

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tonic::async_trait;
use uuid::Uuid;

use crate::router::{Cost, Edge};

/// Routes loaded at startup when `seed_routes` is enabled.
pub const DEFAULT_ROUTES: &[(&str, &str, Decimal)] = &[
    ("GRU", "BRC", dec!(10)),
    ("BRC", "SCL", dec!(5)),
    ("GRU", "CDG", dec!(75)),
    ("GRU", "SCL", dec!(20)),
    ("GRU", "ORL", dec!(56)),
    ("ORL", "CDG", dec!(5)),
    ("SCL", "ORL", dec!(20)),
];

/// Smallest cost a route may carry.
pub const MIN_COST: Decimal = dec!(0.01);

/// Represents errors that can occur during store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// No route with the requested id.
    NotFound,

    /// Origin or destination is empty.
    MissingLabel,

    /// Cost is below [`MIN_COST`].
    InvalidCost,

    /// The backing store could not be reached.
    Unavailable,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            StoreError::NotFound => write!(f, "Route not found."),
            StoreError::MissingLabel => write!(f, "Origin and destination are required."),
            StoreError::InvalidCost => write!(f, "Cost must be at least {MIN_COST}."),
            StoreError::Unavailable => write!(f, "Store unavailable."),
        }
    }
}

impl std::error::Error for StoreError {}

/// Route segment fields supplied on insert and update.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteData {
    /// origin label
    pub origin: String,
    /// destination label
    pub destination: String,
    /// cost of the segment
    pub cost: Cost,
}

impl RouteData {
    /// Creates a payload.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, cost: Cost) -> Self {
        RouteData {
            origin: origin.into(),
            destination: destination.into(),
            cost,
        }
    }

    /// Checks the payload before it is written.
    ///
    /// Labels must be non-empty and the cost at least [`MIN_COST`].
    /// The router trusts these rules and does not re-check them.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.origin.is_empty() || self.destination.is_empty() {
            return Err(StoreError::MissingLabel);
        }

        if self.cost < MIN_COST {
            return Err(StoreError::InvalidCost);
        }

        Ok(())
    }
}

/// A stored route segment.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRecord {
    /// id
    pub id: Uuid,
    /// origin label
    pub origin: String,
    /// destination label
    pub destination: String,
    /// cost of the segment
    pub cost: Cost,
}

impl RouteRecord {
    fn from_data(id: Uuid, data: RouteData) -> Self {
        RouteRecord {
            id,
            origin: data.origin,
            destination: data.destination,
            cost: data.cost,
        }
    }
}

impl From<&RouteRecord> for Edge {
    fn from(record: &RouteRecord) -> Self {
        Edge::new(record.origin.clone(), record.destination.clone(), record.cost)
    }
}

/// Storage backend for the route table.
#[async_trait]
pub trait RouteStore: Debug + Send + Sync {
    /// Every stored route, in insertion order. Updates keep a route's
    /// position.
    async fn list(&self) -> Result<Vec<RouteRecord>, StoreError>;

    /// Validates and stores a new route under a fresh id.
    async fn insert(&self, data: RouteData) -> Result<RouteRecord, StoreError>;

    /// Validates and replaces the fields of an existing route.
    async fn update(&self, id: &Uuid, data: RouteData) -> Result<RouteRecord, StoreError>;

    /// Removes a route. Returns `false` when the id is unknown.
    async fn delete(&self, id: &Uuid) -> Result<bool, StoreError>;
}

//! In-memory route store.

use rust_decimal::Decimal;
use tokio::sync::RwLock;
use tonic::async_trait;
use uuid::Uuid;

use super::{RouteData, RouteRecord, RouteStore, StoreError};

/// Keeps the route table in a `Vec` behind a read/write lock.
///
/// `list` clones the table under the read lock, so every search runs over
/// one complete snapshot.
#[derive(Debug, Default)]
pub struct MemoryStore {
    routes: RwLock<Vec<RouteRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts each `(origin, destination, cost)` triple in order.
    ///
    /// Stops at the first invalid triple; rows inserted before it are kept.
    pub async fn seed(&self, routes: &[(&str, &str, Decimal)]) -> Result<usize, StoreError> {
        for (origin, destination, cost) in routes {
            self.insert(RouteData::new(*origin, *destination, *cost))
                .await?;
        }
        store_info!("(seed) loaded {} routes.", routes.len());
        Ok(routes.len())
    }
}

#[async_trait]
impl RouteStore for MemoryStore {
    async fn list(&self) -> Result<Vec<RouteRecord>, StoreError> {
        let routes = self.routes.read().await;
        store_debug!("(list) {} routes.", routes.len());
        Ok(routes.clone())
    }

    async fn insert(&self, data: RouteData) -> Result<RouteRecord, StoreError> {
        data.validate().map_err(|e| {
            store_warn!("(insert) rejected {:?}: {e}", data);
            e
        })?;

        let record = RouteRecord::from_data(Uuid::new_v4(), data);
        self.routes.write().await.push(record.clone());
        store_debug!("(insert) stored route {}.", record.id);
        Ok(record)
    }

    async fn update(&self, id: &Uuid, data: RouteData) -> Result<RouteRecord, StoreError> {
        data.validate().map_err(|e| {
            store_warn!("(update) rejected {:?} for {}: {e}", data, id);
            e
        })?;

        let mut routes = self.routes.write().await;
        let Some(existing) = routes.iter_mut().find(|route| route.id == *id) else {
            store_debug!("(update) no such route with ID {}.", id);
            return Err(StoreError::NotFound);
        };

        *existing = RouteRecord::from_data(*id, data);
        store_debug!("(update) route {} updated.", id);
        Ok(existing.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, StoreError> {
        let mut routes = self.routes.write().await;
        let Some(position) = routes.iter().position(|route| route.id == *id) else {
            store_debug!("(delete) no such route with ID {}.", id);
            return Ok(false);
        };

        routes.remove(position);
        store_debug!("(delete) route {} removed.", id);
        Ok(true)
    }
}

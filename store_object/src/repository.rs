//! Repository contract
//!
//! This module defines the uniform data-access contract domain services
//! implement over their backing store. The infrastructure core does not
//! implement it; it is the seam the cache-aside service is composed in
//! front of (look the record up in the cache, fall back to the repository
//! on a miss, write the result back).

use crate::entity::Entity;
use crate::errors::StoreError;
use async_trait::async_trait;
use uuid::Uuid;

/// Common database operations over one entity type.
#[async_trait]
pub trait Repository: Send + Sync {
    /// The entity type this repository manages
    type Entity: Entity;

    /// List all records
    async fn get_all(&self) -> Result<Vec<Self::Entity>, StoreError>;

    /// Fetch one record by its ID
    async fn get_by_id(&self, id: Uuid) -> Result<Self::Entity, StoreError>;

    /// Insert a new record
    async fn create(&self, entity: Self::Entity) -> Result<Self::Entity, StoreError>;

    /// Update an existing record
    async fn update(&self, entity: Self::Entity) -> Result<Self::Entity, StoreError>;

    /// Delete a record by its ID, returning the deleted record
    async fn delete(&self, id: Uuid) -> Result<Self::Entity, StoreError>;
}

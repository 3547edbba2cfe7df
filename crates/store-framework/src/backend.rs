//! # Backend Trait
//!
//! The remote side of a store. A `Backend<T>` speaks to whatever owns the authoritative
//! collection (normally a REST service) and returns decoded entities. The `StoreActor`
//! receives its backend in `run()`, so the same actor loop works against HTTP in
//! production and against [`MockBackend`](crate::mock::MockBackend) in tests.

use crate::entity::StoreEntity;
use crate::error::ApiError;
use async_trait::async_trait;

/// The four remote operations a store mirrors.
///
/// | Method | REST mapping |
/// |--------|--------------|
/// | `list` | `GET /collection` |
/// | `create` | `POST /collection` |
/// | `advance` | `PUT /collection/:id` |
/// | `delete` | `DELETE /collection/:id` |
#[async_trait]
pub trait Backend<T: StoreEntity>: Send + Sync + 'static {
    /// Fetch the whole collection.
    async fn list(&self) -> Result<Vec<T>, ApiError>;

    /// Create a new entity and return it as acknowledged by the backend.
    async fn create(&self, draft: &T::Draft) -> Result<T, ApiError>;

    /// Move an entity to its next lifecycle state and return the updated entity.
    async fn advance(&self, id: &T::Id) -> Result<T, ApiError>;

    /// Remove an entity. The response body is ignored.
    async fn delete(&self, id: &T::Id) -> Result<(), ApiError>;
}

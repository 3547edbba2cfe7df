//! # EntityClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `snapshot`,
//! `get` and `delete` methods built on top of a generic `StoreClient`.
use crate::{FrameworkError, StoreClient, StoreEntity};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard store operations.
///
/// A wrapper implements `inner()` and `map_error()`; everything that needs no
/// domain-specific translation comes for free.
///
/// ```rust,ignore
/// #[async_trait]
/// impl EntityClient<Order> for OrderClient {
///     type Error = OrderError;
///
///     fn inner(&self) -> &StoreClient<Order> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         OrderError::from(e)
///     }
/// }
///
/// // snapshot(), get() and delete() are provided automatically
/// let orders = client.snapshot().await?;
/// ```
#[async_trait]
pub trait EntityClient<T: StoreEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Current mirror contents.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Fetch an entity from the mirror by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}

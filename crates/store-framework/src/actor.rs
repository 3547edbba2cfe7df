//! # Generic Store Actor
//!
//! This module defines the `StoreActor`, the component that owns the in-memory mirror of a
//! remote collection. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the mirror.

use crate::backend::Backend;
use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::{ApiError, FrameworkError};
use crate::message::StoreRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that mirrors a remote collection.
///
/// # Architecture Note
/// This struct is the "Server" half of the store. It owns the state (`items`) and the
/// receiver end of the channel. Because messages are processed one at a time, there is
/// exactly one writer and no `Mutex` is needed around the list.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StoreActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass the backend into `actor.run(backend)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust,ignore
/// let (actor, client) = StoreActor::<Order>::new(32);
/// tokio::spawn(actor.run(RestBackend::new(http, base_url, "orders")));
/// let orders = client.refresh().await?;
/// ```
///
/// # Operations
///
/// * **Refresh**: calls `Backend::list`. On success the mirror is replaced wholesale;
///   on failure it is left untouched.
/// * **Create**: runs `T::validate_draft`, then `Backend::create`. The acknowledged entity
///   is inserted at the front (newest first). An acknowledged entity without an id is
///   rejected as malformed.
/// * **Advance**: requires the id to be present locally (otherwise `NotFound`) and
///   `StoreEntity::can_advance` to hold (otherwise `CannotAdvance`). Either rejection
///   skips the backend. On success the matching entry is replaced by the returned entity.
/// * **Delete**: calls `Backend::delete`. On success the matching entry is removed if
///   present.
/// * **Snapshot / Get**: read the mirror only.
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    items: Vec<T>,
}

impl<T: StoreEntity> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            items: Vec::new(),
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs the store's event loop, processing messages until the channel closes.
    ///
    /// The backend is injected here rather than in `new()`, so the client half can be
    /// handed out before the transport is configured.
    pub async fn run<B: Backend<T>>(mut self, backend: B) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Refresh { respond_to } => {
                    debug!(entity_type, "Refresh");
                    let result = match backend.list().await {
                        Ok(items) => {
                            self.items = items;
                            info!(entity_type, size = self.items.len(), "Refreshed");
                            Ok(self.items.clone())
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, size = self.items.len(), "Refresh failed, keeping current list");
                            Err(FrameworkError::Api(e))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                StoreRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.items.clone()));
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.items.iter().find(|item| item.has_id(&id)).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Create { draft, respond_to } => {
                    debug!(entity_type, ?draft, "Create");
                    let _ = respond_to.send(self.create(&backend, draft, entity_type).await);
                }
                StoreRequest::Advance { id, respond_to } => {
                    debug!(entity_type, %id, "Advance");
                    let _ = respond_to.send(self.advance(&backend, id, entity_type).await);
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = match backend.delete(&id).await {
                        Ok(()) => {
                            let before = self.items.len();
                            self.items.retain(|item| !item.has_id(&id));
                            let removed = before - self.items.len();
                            info!(entity_type, %id, removed, size = self.items.len(), "Deleted");
                            Ok(())
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Delete failed");
                            Err(FrameworkError::Api(e))
                        }
                    };
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.items.len(), "Shutdown");
    }

    async fn create<B: Backend<T>>(
        &mut self,
        backend: &B,
        draft: T::Draft,
        entity_type: &str,
    ) -> Result<T, FrameworkError> {
        if let Err(e) = T::validate_draft(&draft) {
            warn!(entity_type, error = %e, "Draft rejected");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }

        let item = backend.create(&draft).await.map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            FrameworkError::Api(e)
        })?;

        let Some(id) = item.id() else {
            warn!(entity_type, "Created entity has no id");
            return Err(ApiError::Malformed("created entity has no id".to_string()).into());
        };
        info!(entity_type, %id, size = self.items.len() + 1, "Created");

        self.items.insert(0, item.clone());
        Ok(item)
    }

    async fn advance<B: Backend<T>>(
        &mut self,
        backend: &B,
        id: T::Id,
        entity_type: &str,
    ) -> Result<T, FrameworkError> {
        let Some(index) = self.items.iter().position(|item| item.has_id(&id)) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        if !self.items[index].can_advance() {
            warn!(entity_type, %id, "Cannot advance");
            return Err(FrameworkError::CannotAdvance(id.to_string()));
        }

        let updated = backend.advance(&id).await.map_err(|e| {
            warn!(entity_type, %id, error = %e, "Advance failed");
            FrameworkError::Api(e)
        })?;

        if !updated.has_id(&id) {
            warn!(entity_type, %id, "Backend returned a different entity");
            return Err(ApiError::Malformed(format!("expected entity {id} in response")).into());
        }

        self.items[index] = updated.clone();
        info!(entity_type, %id, "Advanced");
        Ok(updated)
    }
}

//! # Generic Client
//!
//! This module defines the generic client for communicating with a store.

use crate::entity::StoreEntity;
use crate::error::FrameworkError;
use crate::message::{Response, StoreRequest};
use tokio::sync::{mpsc, oneshot};

/// ## StoreClient
///
/// The `StoreClient<T>` provides a type‑safe, async API for interacting with a `StoreActor<T>`.
/// It forwards requests over a Tokio mpsc channel and returns results via oneshot channels.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Async API** – all methods resolve to `Result<…, FrameworkError>`.
/// * **Generic** – works with any entity that implements `StoreEntity`.
pub struct StoreClient<T: StoreEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoreEntity> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: StoreEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> StoreRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)?
    }

    /// Reload the whole collection from the backend.
    pub async fn refresh(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| StoreRequest::Refresh { respond_to })
            .await
    }

    /// Current contents of the mirror, without contacting the backend.
    pub async fn snapshot(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| StoreRequest::Snapshot { respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    pub async fn create(&self, draft: T::Draft) -> Result<T, FrameworkError> {
        self.request(|respond_to| StoreRequest::Create { draft, respond_to })
            .await
    }

    pub async fn advance(&self, id: T::Id) -> Result<T, FrameworkError> {
        self.request(|respond_to| StoreRequest::Advance { id, respond_to })
            .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| StoreRequest::Delete { id, respond_to })
            .await
    }
}

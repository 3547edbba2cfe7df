//! # Mock Framework & Testing Guide
//!
//! Two kinds of test doubles live here:
//!
//! | Double | Replaces | Use Case |
//! |--------|----------|----------|
//! | [`MockBackend`] | the remote service | Testing the real `StoreActor` (and anything built on its client) without a network |
//! | [`create_mock_client`] + `expect_*` helpers | the `StoreActor` itself | Testing client wrappers message by message |
//!
//! ## Pattern 1: Real Store, Mocked Backend
//!
//! ```rust,ignore
//! let mut backend = MockBackend::<Order>::new();
//! backend.expect_list().return_ok(vec![order("1", "Acme")]);
//! backend.expect_advance(OrderId::from("1")).return_ok(completed("1", "Acme"));
//!
//! let (actor, client) = StoreActor::new(8);
//! tokio::spawn(actor.run(backend.clone()));
//!
//! client.refresh().await.unwrap();
//! client.advance(OrderId::from("1")).await.unwrap();
//! backend.verify();
//! ```
//!
//! ## Pattern 2: Mocked Store
//!
//! ```rust,ignore
//! let (client, mut receiver) = create_mock_client::<Order>(8);
//! let task = tokio::spawn(async move { client.create(draft).await });
//!
//! let (draft, responder) = expect_create(&mut receiver).await.unwrap();
//! responder.send(Err(FrameworkError::StoreClosed)).unwrap();
//! ```
//!
//! ## Testing Failure Scenarios
//!
//! `return_err` makes it trivial to simulate failures that are hard to produce against a
//! live service: refused connections, 500s, truncated bodies.
//!
//! Calls that match no expectation do not panic inside the store task. They answer with
//! `ApiError::Network("unexpected call ...")` and are reported by [`MockBackend::verify`].

use crate::backend::Backend;
use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::{ApiError, FrameworkError};
use crate::message::StoreRequest;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected backend call and the response to give.
enum Expectation<T: StoreEntity> {
    List {
        response: Result<Vec<T>, ApiError>,
    },
    Create {
        response: Result<T, ApiError>,
    },
    Advance {
        id: T::Id,
        response: Result<T, ApiError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), ApiError>,
    },
}

/// A backend call as observed by [`MockBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall<Id> {
    List,
    Create,
    Advance(Id),
    Delete(Id),
}

struct MockState<T: StoreEntity> {
    expectations: VecDeque<Expectation<T>>,
    calls: Vec<MockCall<T::Id>>,
    unexpected: Vec<String>,
}

/// An in-memory backend with expectation tracking for fluent testing.
///
/// Cloning a `MockBackend` shares its state, so a test can hand one clone to
/// `StoreActor::run` and keep another for `verify()`.
pub struct MockBackend<T: StoreEntity> {
    state: Arc<Mutex<MockState<T>>>,
}

impl<T: StoreEntity> Clone for MockBackend<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<T: StoreEntity> Default for MockBackend<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> MockBackend<T> {
    /// Creates a new mock backend with no expectations.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                expectations: VecDeque::new(),
                calls: Vec::new(),
                unexpected: Vec::new(),
            })),
        }
    }

    // Poisoning is ignored so `verify` still sees the recorded calls.
    fn lock(&self) -> MutexGuard<'_, MockState<T>> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, expectation: Expectation<T>) {
        self.lock().expectations.push_back(expectation);
    }

    /// Expects a `list` call.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            backend: self.clone(),
        }
    }

    /// Expects a `create` call.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            backend: self.clone(),
        }
    }

    /// Expects an `advance` call for the given id.
    pub fn expect_advance(&mut self, id: T::Id) -> AdvanceExpectationBuilder<T> {
        AdvanceExpectationBuilder {
            id,
            backend: self.clone(),
        }
    }

    /// Expects a `delete` call for the given id.
    pub fn expect_delete(&mut self, id: T::Id) -> DeleteExpectationBuilder<T> {
        DeleteExpectationBuilder {
            id,
            backend: self.clone(),
        }
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<MockCall<T::Id>> {
        self.lock().calls.clone()
    }

    /// Verifies that all expectations were met and no unexpected call was made.
    pub fn verify(&self) {
        let state = self.lock();
        if !state.unexpected.is_empty() {
            panic!("Unexpected backend calls: {:?}", state.unexpected);
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }

    fn unexpected<R>(state: &mut MockState<T>, call: String) -> Result<R, ApiError> {
        let message = format!("unexpected call {call}");
        state.unexpected.push(call);
        Err(ApiError::Network(message))
    }
}

#[async_trait]
impl<T: StoreEntity> Backend<T> for MockBackend<T> {
    async fn list(&self) -> Result<Vec<T>, ApiError> {
        let mut state = self.lock();
        state.calls.push(MockCall::List);
        match state.expectations.pop_front() {
            Some(Expectation::List { response }) => response,
            _ => Self::unexpected(&mut state, "list".to_string()),
        }
    }

    async fn create(&self, draft: &T::Draft) -> Result<T, ApiError> {
        let mut state = self.lock();
        state.calls.push(MockCall::Create);
        match state.expectations.pop_front() {
            Some(Expectation::Create { response }) => response,
            _ => Self::unexpected(&mut state, format!("create {draft:?}")),
        }
    }

    async fn advance(&self, id: &T::Id) -> Result<T, ApiError> {
        let mut state = self.lock();
        state.calls.push(MockCall::Advance(id.clone()));
        match state.expectations.pop_front() {
            Some(Expectation::Advance {
                id: expected,
                response,
            }) if &expected == id => response,
            _ => Self::unexpected(&mut state, format!("advance {id}")),
        }
    }

    async fn delete(&self, id: &T::Id) -> Result<(), ApiError> {
        let mut state = self.lock();
        state.calls.push(MockCall::Delete(id.clone()));
        match state.expectations.pop_front() {
            Some(Expectation::Delete {
                id: expected,
                response,
            }) if &expected == id => response,
            _ => Self::unexpected(&mut state, format!("delete {id}")),
        }
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: StoreEntity> {
    backend: MockBackend<T>,
}

impl<T: StoreEntity> ListExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, items: Vec<T>) {
        self.backend.push(Expectation::List { response: Ok(items) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ApiError) {
        self.backend.push(Expectation::List {
            response: Err(error),
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: StoreEntity> {
    backend: MockBackend<T>,
}

impl<T: StoreEntity> CreateExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, item: T) {
        self.backend.push(Expectation::Create { response: Ok(item) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ApiError) {
        self.backend.push(Expectation::Create {
            response: Err(error),
        });
    }
}

/// Builder for `advance` expectations.
pub struct AdvanceExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    backend: MockBackend<T>,
}

impl<T: StoreEntity> AdvanceExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, item: T) {
        self.backend.push(Expectation::Advance {
            id: self.id,
            response: Ok(item),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ApiError) {
        self.backend.push(Expectation::Advance {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    backend: MockBackend<T>,
}

impl<T: StoreEntity> DeleteExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self) {
        self.backend.push(Expectation::Delete {
            id: self.id,
            response: Ok(()),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ApiError) {
        self.backend.push(Expectation::Delete {
            id: self.id,
            response: Err(error),
        });
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a store client and the receiver its requests arrive on.
///
/// # Testing Strategy
/// When testing a client wrapper (e.g., `OrderClient`), there is no need to run a real
/// `StoreActor`. The test plays the actor: it reads each request from `receiver`,
/// asserts on it, and answers through the responder.
pub fn create_mock_client<T: StoreEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Refresh request
pub async fn expect_refresh<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(StoreRequest::Refresh { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Draft, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { draft, respond_to }) => Some((draft, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Advance request
pub async fn expect_advance<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Advance { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: Option<u32>,
        text: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Note error")]
    struct NoteError;

    impl StoreEntity for Note {
        type Id = u32;
        type Draft = String;
        type Error = NoteError;

        fn id(&self) -> Option<&u32> {
            self.id.as_ref()
        }
    }

    fn note(id: u32, text: &str) -> Note {
        Note {
            id: Some(id),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_backend_with_expectations() {
        let mut backend = MockBackend::<Note>::new();
        backend.expect_list().return_ok(vec![note(1, "first")]);
        backend.expect_create().return_ok(note(2, "second"));

        let listed = backend.list().await.unwrap();
        assert_eq!(listed, vec![note(1, "first")]);

        let created = backend.create(&"second".to_string()).await.unwrap();
        assert_eq!(created.id, Some(2));

        assert_eq!(backend.calls(), vec![MockCall::List, MockCall::Create]);
        backend.verify();
    }

    #[tokio::test]
    async fn test_mock_backend_reports_id_mismatch() {
        let mut backend = MockBackend::<Note>::new();
        backend.expect_delete(1).return_ok();

        let result = backend.delete(&2).await;
        assert!(matches!(result, Err(ApiError::Network(msg)) if msg.contains("delete 2")));
        assert_eq!(backend.calls(), vec![MockCall::Delete(2)]);
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected backend calls")]
    async fn test_verify_panics_on_unexpected_call() {
        let backend = MockBackend::<Note>::new();
        let _ = backend.list().await;
        backend.verify();
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Note>(10);

        let create_task = tokio::spawn(async move { client.create("hello".to_string()).await });

        let (draft, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(draft, "hello");
        responder.send(Ok(note(7, "hello"))).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(n) if n.id == Some(7)));
    }
}

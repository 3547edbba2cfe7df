//! # Store Framework
//!
//! This crate provides the building blocks for keeping a type-safe, in-memory mirror of a
//! remote REST collection. It applies the **Actor Model** to client-side state: one task
//! owns the list, every change goes through it as a message, and every change is the
//! result of a backend acknowledgment.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into four layers:
//!
//! 1. **Entity Layer** ([`StoreEntity`]) - What is mirrored and how it is identified
//! 2. **Remote Layer** ([`Backend`]) - How the authoritative collection is reached
//! 3. **Runtime Layer** ([`StoreActor`]) - Message processing and the single writer
//! 4. **Interface Layer** ([`StoreClient`], [`EntityClient`]) - Type-safe communication
//!
//! ## The Mirror Invariant
//!
//! The list held by a [`StoreActor`] is always the direct result of the last successful
//! backend response for each operation:
//!
//! - a successful refresh replaces the whole list, in backend order
//! - a successful create puts the acknowledged entity at the front
//! - a successful advance replaces exactly one entry
//! - a successful delete removes exactly the matching entry
//!
//! A failed operation never changes the list. The failure is returned to the caller as a
//! [`FrameworkError`], which distinguishes network failure, non-2xx response and
//! malformed payload through [`ApiError`].
//!
//! ## Context Injection Pattern
//!
//! The backend is injected at **runtime** via [`StoreActor::run`], not at construction
//! time. A client handle can be created and handed to views before the HTTP transport is
//! configured, and tests can inject a [`mock::MockBackend`] instead.
//!
//! ```rust
//! use store_framework::mock::MockBackend;
//! use store_framework::{StoreActor, StoreEntity};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Part { id: Option<u32>, name: String }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("part error")]
//! struct PartError;
//!
//! impl StoreEntity for Part {
//!     type Id = u32;
//!     type Draft = String;
//!     type Error = PartError;
//!     fn id(&self) -> Option<&u32> { self.id.as_ref() }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut backend = MockBackend::<Part>::new();
//!     backend.expect_create().return_ok(Part { id: Some(1), name: "Bolt".into() });
//!
//!     let (actor, client) = StoreActor::<Part>::new(10);
//!     tokio::spawn(actor.run(backend.clone()));
//!
//!     let part = client.create("Bolt".to_string()).await.unwrap();
//!     assert_eq!(part.id, Some(1));
//!     assert_eq!(client.snapshot().await.unwrap().len(), 1);
//!     backend.verify();
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - The store runs in its own Tokio task
//! - Messages are processed **sequentially**, so there is exactly one writer
//! - Clients are cheap to clone and can be shared across tasks
//! - A request waiting on the backend delays later requests; nothing is cancelled or merged

pub mod actor;
pub mod backend;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use backend::Backend;
pub use client::StoreClient;
pub use client_trait::EntityClient;
pub use entity::StoreEntity;
pub use error::{ApiError, FrameworkError};
pub use message::{Response, StoreRequest};

//! # StoreEntity Trait
//!
//! The `StoreEntity` trait defines the contract that every resource mirrored from a REST
//! collection must implement to be managed by the generic `StoreActor`. It names the
//! identifier type, the draft (creation payload) type and the error type, and provides a
//! validation hook that runs before a draft ever leaves the process.
//!
//! # Architecture Note
//! The store never invents entities. Every entity it holds was decoded from a backend
//! response, so the only thing the store needs from an entity is a way to read its
//! identifier back. The backend assigns identifiers; an entity without one was never
//! acknowledged by the backend.
//!
//! # Provided Methods (Hooks)
//! - [`StoreEntity::validate_draft`]
//!
//! The default implementation accepts every draft (`Ok(())`).

use std::fmt::{Debug, Display};

/// Trait that any entity must implement to be mirrored by a `StoreActor`.
///
/// We use "Associated Types" to enforce type safety: an `Order` store only accepts an
/// `Order` draft, and the compiler rejects anything else.
pub trait StoreEntity: Clone + Debug + Send + Sync + 'static {
    /// The identifier assigned by the backend (e.g., a database object id).
    type Id: Eq + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Draft: Send + Sync + Debug;

    /// The error type for this entity.
    /// Must implement std::error::Error for proper error propagation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The backend-assigned identifier, or `None` if the backend never assigned one.
    fn id(&self) -> Option<&Self::Id>;

    /// Called before a create request is sent.
    /// Use this hook to reject drafts that the backend would never accept.
    fn validate_draft(_draft: &Self::Draft) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Whether an advance request may be sent for this entity.
    /// Entities with a terminal state return `false` once they reach it.
    fn can_advance(&self) -> bool {
        true
    }

    /// Returns `true` if this entity carries the given identifier.
    fn has_id(&self, id: &Self::Id) -> bool {
        self.id() == Some(id)
    }
}

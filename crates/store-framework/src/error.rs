//! # Framework Errors
//!
//! This module defines the common error types used throughout the store framework.
//! By centralizing error definitions, every backend and every client reports failures
//! the same way: a network failure, a non-2xx response, or a malformed payload.

/// Errors reported by a [`Backend`](crate::Backend) implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, timeout).
    #[error("Network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("Backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// The backend answered 2xx but the body could not be used.
    #[error("Malformed payload: {0}")]
    Malformed(String),
}

impl ApiError {
    /// HTTP status code for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors that can occur within the store framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// The entity is in a state it cannot advance from.
    #[error("Item cannot advance: {0}")]
    CannotAdvance(String),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

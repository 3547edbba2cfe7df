//! Error types for the Order store.

use crate::model::OrderField;
use store_framework::{ApiError, FrameworkError};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// A required form field is blank.
    #[error("{} is required", .0.label())]
    MissingField(OrderField),

    /// A form input name that does not belong to an order.
    #[error("Unknown order field: {0}")]
    UnknownField(String),

    /// The order is not in the current list.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// Completion was requested for an order that is already completed.
    #[error("Order {0} is already completed")]
    AlreadyCompleted(String),

    /// The order service failed or answered with something unusable.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A submit was attempted while the form is closed.
    #[error("The order form is not open")]
    FormClosed,

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::CannotAdvance(id) => OrderError::AlreadyCompleted(id),
            FrameworkError::Api(api) => OrderError::Api(api),
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(order_error) => *order_error,
                Err(other) => OrderError::StoreCommunicationError(other.to_string()),
            },
            other => OrderError::StoreCommunicationError(other.to_string()),
        }
    }
}

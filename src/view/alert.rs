use crate::order_store::OrderError;
use std::fmt::Display;
use store_framework::ApiError;

/// A blocking, user-facing message for a failed operation.
///
/// Every failure is phrased as "Failed to <action>: <reason>", where the reason
/// tells a network failure, a rejected request and a malformed response apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub action: String,
    pub reason: String,
}

impl Alert {
    pub fn new(action: impl Into<String>, error: &OrderError) -> Self {
        Self {
            action: action.into(),
            reason: reason(error),
        }
    }

    /// An alert for a failure outside the order service (e.g. output encoding).
    pub fn from_message(action: impl Into<String>, reason: impl Display) -> Self {
        Self {
            action: action.into(),
            reason: reason.to_string(),
        }
    }
}

fn reason(error: &OrderError) -> String {
    match error {
        OrderError::Api(ApiError::Network(detail)) => {
            format!("could not reach the order service ({detail})")
        }
        OrderError::Api(ApiError::Status { status, body }) if body.trim().is_empty() => {
            format!("the order service rejected the request (HTTP {status})")
        }
        OrderError::Api(ApiError::Status { status, body }) => {
            format!(
                "the order service rejected the request (HTTP {status}: {})",
                body.trim()
            )
        }
        OrderError::Api(ApiError::Malformed(detail)) => {
            format!("the order service sent an unexpected response ({detail})")
        }
        OrderError::NotFound(id) => format!("order {id} is not in the current list"),
        OrderError::AlreadyCompleted(id) => format!("order {id} is already completed"),
        other => other.to_string(),
    }
}

impl Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to {}: {}", self.action, self.reason)
    }
}

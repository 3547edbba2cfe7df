//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `StoreClient` and `StoreActor`.

use crate::entity::StoreEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the store to request operations.
///
/// The remote variants (`Refresh`, `Create`, `Advance`, `Delete`) each cause exactly one
/// backend call. The local variants (`Snapshot`, `Get`) only read the mirror.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Refresh {
        respond_to: Response<Vec<T>>,
    },
    Snapshot {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Create {
        draft: T::Draft,
        respond_to: Response<T>,
    },
    Advance {
        id: T::Id,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}

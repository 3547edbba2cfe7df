//! # Order Store
//!
//! This module wires the [`Order`] entity into the generic store framework.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](store_framework::StoreEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the store and its client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (store, generic_client) = order_store::new();
//! let client = OrderClient::new(generic_client);
//! let base_url = reqwest::Url::parse("http://localhost:5000")?;
//! tokio::spawn(store.run(RestBackend::<Order>::new(http, base_url, "orders")?));
//!
//! let orders = client.list_orders().await?;
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Order;
use store_framework::{StoreActor, StoreClient};

/// Channel capacity used by [`new()`].
pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// Creates a new Order store and its client.
pub fn new() -> (StoreActor<Order>, StoreClient<Order>) {
    with_buffer(DEFAULT_BUFFER_SIZE)
}

/// Creates a new Order store with a custom channel capacity.
pub fn with_buffer(buffer_size: usize) -> (StoreActor<Order>, StoreClient<Order>) {
    StoreActor::new(buffer_size)
}

//! Type-safe wrappers around [`StoreClient`](store_framework::StoreClient).

pub mod order_client;

pub use order_client::*;

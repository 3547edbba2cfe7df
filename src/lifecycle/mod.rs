//! # Dashboard Lifecycle
//!
//! Wires the order store to its backend and owns the running task.
//!
//! The store is created without a backend and receives one when it starts
//! (`actor.run(backend)`), so the same wiring works for the REST backend in
//! production and a `MockBackend` in tests:
//!
//! ```rust,ignore
//! let (actor, client) = order_store::with_buffer(config.buffer_size);
//! let handle = tokio::spawn(actor.run(backend));
//! ```
//!
//! Shutdown is the reverse: dropping every client closes the channel, the store
//! logs its final size and exits, and [`Dashboard::shutdown`] awaits the task.

pub mod dashboard;
pub mod tracing;

pub use dashboard::*;

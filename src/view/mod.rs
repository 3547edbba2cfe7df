//! # Order View
//!
//! Everything the user sees, derived from the store's current list:
//!
//! - [`filter`] - case-insensitive customer search
//! - [`summary`] - total / completed / pending counts
//! - [`render`] - table and card layouts with per-row actions
//! - [`form`] - the new-order form and its open/closed state
//! - [`alert`] - user-facing messages for failed operations
//!
//! Nothing here owns orders. Views take a slice from
//! [`OrderClient`](crate::clients::OrderClient) and project it.

pub mod alert;
pub mod filter;
pub mod form;
pub mod render;
pub mod summary;

pub use alert::*;
pub use filter::*;
pub use form::*;
pub use render::*;
pub use summary::*;

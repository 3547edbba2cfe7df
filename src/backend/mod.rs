//! Transport implementations of [`Backend`](store_framework::Backend).
//!
//! - [`rest`] - [`RestBackend`], JSON over HTTP with `reqwest`

pub mod rest;

pub use rest::*;

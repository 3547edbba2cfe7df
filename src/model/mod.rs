//! Pure data structures (DTOs) mirrored by the [`StoreEntity`](store_framework::StoreEntity) store.

pub mod draft;
pub mod order;

pub use draft::*;
pub use order::*;

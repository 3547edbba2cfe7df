//! StoreEntity trait implementation for the Order domain type.
//!
//! This module contains the [`StoreEntity`] trait implementation
//! that enables [`Order`] to be mirrored by the generic [`store_framework::StoreActor`].

use crate::model::{Order, OrderCreate, OrderId};
use crate::order_store::OrderError;
use store_framework::StoreEntity;

impl StoreEntity for Order {
    type Id = OrderId;
    type Draft = OrderCreate;
    type Error = OrderError;

    fn id(&self) -> Option<&OrderId> {
        self.id.as_ref()
    }

    /// `Pending → Completed` is the only transition.
    fn can_advance(&self) -> bool {
        !self.is_completed()
    }

    /// Blank fields never reach the order service.
    fn validate_draft(draft: &OrderCreate) -> Result<(), OrderError> {
        draft.validate()
    }
}

use crate::model::{Order, OrderStatus};
use serde::Serialize;
use std::fmt::Display;

/// Counts derived from the current list. `total == completed + pending` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl Summary {
    pub fn of(orders: &[Order]) -> Self {
        orders.iter().fold(Self::default(), |mut summary, order| {
            summary.total += 1;
            match order.status {
                OrderStatus::Completed => summary.completed += 1,
                OrderStatus::Pending => summary.pending += 1,
            }
            summary
        })
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Total: {} | Completed: {} | Pending: {}",
            self.total, self.completed, self.pending
        )
    }
}

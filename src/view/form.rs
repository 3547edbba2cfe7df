use crate::clients::OrderClient;
use crate::model::{Order, OrderDraft, OrderField};
use crate::order_store::OrderError;
use tracing::{debug, warn};

/// The new-order form: a draft plus whether the form is showing.
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    draft: OrderDraft,
    open: bool,
}

impl OrderForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hides the form. The draft is kept for the next `open()`.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn set(&mut self, field: OrderField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Sets a field by its input name (e.g. `customerName`).
    pub fn set_named(&mut self, name: &str, value: impl Into<String>) -> Result<(), OrderError> {
        let field = name.parse::<OrderField>()?;
        self.set(field, value);
        Ok(())
    }

    /// Creates the order. On success the draft is cleared and the form closes;
    /// on failure both stay exactly as they were.
    pub async fn submit(&mut self, client: &OrderClient) -> Result<Order, OrderError> {
        if !self.open {
            return Err(OrderError::FormClosed);
        }
        self.draft.validate()?;

        debug!(draft = ?self.draft, "Submitting order form");
        match client.create_order(self.draft.clone()).await {
            Ok(order) => {
                self.draft.clear();
                self.open = false;
                Ok(order)
            }
            Err(e) => {
                warn!(error = %e, "Order form submit failed");
                Err(e)
            }
        }
    }
}

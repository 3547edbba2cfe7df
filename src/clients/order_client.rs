//! # Order Client
//!
//! Provides a high‑level API for interacting with the Order store.
//! It wraps a `StoreClient<Order>` and exposes the dashboard operations.
use crate::model::{Order, OrderDraft, OrderId};
use crate::order_store::OrderError;
use crate::view::{filter_by_customer, Summary};
use async_trait::async_trait;
use store_framework::{EntityClient, FrameworkError, StoreClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order store.
///
/// Every method returns `Result<_, OrderError>`; nothing is logged and dropped.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<Order>,
}

impl OrderClient {
    pub fn new(inner: StoreClient<Order>) -> Self {
        Self { inner }
    }

    /// Reloads every order from the service, replacing the local list.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let orders = self.inner.refresh().await?;
        info!(count = orders.len(), "Orders loaded");
        Ok(orders)
    }

    /// Submits a new order. The acknowledged order is placed first in the list.
    #[instrument(skip(self, draft))]
    pub async fn create_order(&self, draft: OrderDraft) -> Result<Order, OrderError> {
        debug!(?draft, "create_order called");
        draft.validate()?;
        let order = self.inner.create(draft.into_create()).await?;
        info!(id = ?order.id, "Order created");
        Ok(order)
    }

    /// Marks an order as completed.
    #[instrument(skip(self))]
    pub async fn complete_order(&self, id: OrderId) -> Result<Order, OrderError> {
        debug!("Sending request");
        let order = self.inner.advance(id).await?;
        info!(status = %order.status, "Order updated");
        Ok(order)
    }

    /// Deletes an order. The service is asked even if the order is not in the local list.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), OrderError> {
        debug!("Sending request");
        self.delete(id).await?;
        info!("Order deleted");
        Ok(())
    }

    /// The current list, without contacting the service.
    pub async fn orders(&self) -> Result<Vec<Order>, OrderError> {
        self.snapshot().await
    }

    /// Orders whose customer name contains `query`, ignoring case.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Order>, OrderError> {
        let orders = self.snapshot().await?;
        Ok(filter_by_customer(&orders, query)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Total, completed and pending counts for the current list.
    pub async fn summary(&self) -> Result<Summary, OrderError> {
        let orders = self.snapshot().await?;
        Ok(Summary::of(&orders))
    }
}

#[async_trait]
impl EntityClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &StoreClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderField, OrderStatus, Quantity};
    use store_framework::mock::{create_mock_client, expect_advance, expect_create};
    use store_framework::ApiError;

    fn draft() -> OrderDraft {
        OrderDraft {
            customer_name: "Acme".into(),
            product: "Sheet".into(),
            gauge: "22".into(),
            size: "4x8".into(),
            quantity: "10".into(),
        }
    }

    #[tokio::test]
    async fn test_create_order_sends_pending_payload() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move { order_client.create_order(draft()).await });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.customer_name, "Acme");
        assert_eq!(payload.quantity, Quantity::Count(10));
        assert_eq!(payload.status, OrderStatus::Pending);

        responder
            .send(Ok(Order {
                id: Some(OrderId::from("o-1")),
                customer_name: payload.customer_name,
                product: payload.product,
                gauge: payload.gauge,
                size: payload.size,
                quantity: payload.quantity,
                status: payload.status,
            }))
            .unwrap();

        let created = task.await.unwrap().unwrap();
        assert_eq!(created.id, Some(OrderId::from("o-1")));
    }

    #[tokio::test]
    async fn test_create_order_rejects_blank_field_locally() {
        let (client, _receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let mut incomplete = draft();
        incomplete.size.clear();

        let result = order_client.create_order(incomplete).await;
        assert_eq!(result, Err(OrderError::MissingField(OrderField::Size)));
    }

    #[tokio::test]
    async fn test_complete_order_maps_api_error() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task =
            tokio::spawn(async move { order_client.complete_order(OrderId::from("o-9")).await });

        let (id, responder) = expect_advance(&mut receiver)
            .await
            .expect("Expected Advance request");
        assert_eq!(id, OrderId::from("o-9"));

        responder
            .send(Err(FrameworkError::Api(ApiError::Status {
                status: 404,
                body: "Order not found".into(),
            })))
            .unwrap();

        let result = task.await.unwrap();
        assert!(matches!(
            result,
            Err(OrderError::Api(ApiError::Status { status: 404, .. }))
        ));
    }
}

use crate::backend::RestBackend;
use crate::clients::OrderClient;
use crate::config::{ConfigError, DashboardConfig};
use crate::model::Order;
use crate::order_store::{self, OrderError};
use crate::view::{OrderForm, OrderView};
use store_framework::Backend;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ShutdownError {
    /// The store task panicked or was cancelled.
    #[error("Store task failed: {0}")]
    StoreTask(#[from] tokio::task::JoinError),
}

/// A running dashboard: the order store plus the form and view state around it.
pub struct Dashboard {
    pub order_client: OrderClient,
    pub form: OrderForm,
    pub view: OrderView,
    handle: tokio::task::JoinHandle<()>,
}

impl Dashboard {
    /// Validates `config`, builds the HTTP client and starts the store against
    /// `{api_url}/orders`. Must be called inside a Tokio runtime.
    pub fn new(config: &DashboardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        let invalid_url = |reason: String| ConfigError::InvalidUrl {
            url: config.api_url.clone(),
            reason,
        };
        let base_url =
            reqwest::Url::parse(&config.api_url).map_err(|e| invalid_url(e.to_string()))?;
        let backend = RestBackend::<Order>::new(http, base_url, "orders")
            .map_err(|e| invalid_url(e.to_string()))?;
        info!(url = backend.collection_url(), "Starting dashboard");
        Ok(Self::with_backend(config, backend))
    }

    /// Starts the store against any backend.
    pub fn with_backend<B: Backend<Order>>(config: &DashboardConfig, backend: B) -> Self {
        let (actor, client) = order_store::with_buffer(config.buffer_size.max(1));
        let handle = tokio::spawn(actor.run(backend));
        Self {
            order_client: OrderClient::new(client),
            form: OrderForm::new(),
            view: OrderView::new(config.layout),
            handle,
        }
    }

    /// The page-load fetch.
    pub async fn load(&self) -> Result<Vec<Order>, OrderError> {
        self.order_client.list_orders().await
    }

    /// Renders the current list with the configured view.
    pub async fn render(&self) -> Result<String, OrderError> {
        let orders = self.order_client.orders().await?;
        Ok(self.view.render(&orders))
    }

    /// Closes the store and waits for it to finish.
    ///
    /// Returns `Err` if the store task panicked. Clones of `order_client` held
    /// elsewhere keep the store alive, so drop them first.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down dashboard...");
        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Store task failed");
            return Err(e.into());
        }

        info!("Dashboard shutdown complete.");
        Ok(())
    }
}

//! # Factory ERP Dashboard
//!
//! A command-line dashboard for a sheet-metal shop's manufacturing orders,
//! backed by a small REST order service.
//!
//! Four operations are supported, each mirrored into one in-memory list:
//!
//! | Operation | Request | Effect on the list |
//! |---|---|---|
//! | List | `GET /orders` | replaced wholesale |
//! | Create | `POST /orders` | new order prepended |
//! | Complete | `PUT /orders/:id` | that order's status becomes `Completed` |
//! | Delete | `DELETE /orders/:id` | that order removed |
//!
//! The list only changes after the service acknowledges a request. A failure
//! leaves it untouched and comes back as an [`OrderError`](order_store::OrderError).
//!
//! ## Module Tour
//!
//! ### 1. The Engine (`store_framework`)
//! The generic `StoreActor<T>`: one Tokio task owns the list and talks to a
//! `Backend<T>`. Requests arrive over a channel and are answered one at a time.
//!
//! ### 2. The Wire ([`backend`])
//! [`RestBackend`](backend::RestBackend) implements `Backend<T>` over `reqwest`
//! and classifies every failure as network, rejected status, or malformed body.
//!
//! ### 3. The Domain ([`model`], [`order_store`])
//! [`Order`](model::Order), the form draft, and the entity glue that plugs them into the store.
//!
//! ### 4. The Interface ([`clients`])
//! [`OrderClient`](clients::OrderClient) hides message passing behind
//! `list_orders`, `create_order`, `complete_order`, `delete`, `search`, `summary`.
//!
//! ### 5. The Screen ([`view`])
//! Search, summary counts, table and card layouts, the order form, and alerts.
//!
//! ### 6. The Orchestrator ([`lifecycle`], [`config`])
//! [`Dashboard`](lifecycle::Dashboard) starts the store from a
//! [`DashboardConfig`](config::DashboardConfig) and shuts it down again.
//!
//! ## Running
//!
//! ```bash
//! FACTORY_ERP_API_URL=http://localhost:5000 factory-erp list --summary
//! RUST_LOG=debug factory-erp complete 66a1f0c2
//! ```

pub mod backend;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_store;
pub mod view;

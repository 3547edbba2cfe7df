//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` formatter once per process.
//!
//! - Levels come from `RUST_LOG` (`EnvFilter::from_default_env`); nothing is printed by default.
//! - The compact format hides module paths (`with_target(false)`); records carry
//!   `entity_type` and `id` fields instead.
//! - Output goes to stderr, so the rendered dashboard on stdout stays clean.
//!
//! ```bash
//! # State changes only
//! RUST_LOG=info factory-erp list
//!
//! # Payloads and HTTP verbs as well
//! RUST_LOG=debug factory-erp create --customer Acme --product Sheet --gauge 22 --size 4x8 --quantity 10
//! ```
//!
//! A create at `debug` reads roughly:
//!
//! ```text
//! DEBUG create_order: create_order called draft=OrderDraft { customer_name: "Acme", .. }
//! DEBUG Create entity_type="Order" draft=OrderCreate { .. }
//! DEBUG create: POST url=http://localhost:5000/orders
//! INFO Created entity_type="Order" id=66a1f0c2 size=4
//! INFO create_order: Order created id=Some(OrderId("66a1f0c2"))
//! ```
//!
//! Failures are logged at `warn` with an `error` field before they are returned
//! to the caller.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

/// Backend-assigned order identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle flag of an order. The only transition is `Pending → Completed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => f.write_str("Pending"),
            OrderStatus::Completed => f.write_str("Completed"),
        }
    }
}

/// Quantity as entered in the form. The service may echo it back as a number or as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Count(u64),
    Decimal(f64),
    Text(String),
}

impl Quantity {
    /// Whole numbers are sent as JSON numbers, anything else verbatim.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.parse::<u64>() {
            Ok(count) => Quantity::Count(count),
            Err(_) => Quantity::Text(trimmed.to_string()),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Quantity::Text(text) if text.trim().is_empty())
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::Text(String::new())
    }
}

impl From<u64> for Quantity {
    fn from(count: u64) -> Self {
        Quantity::Count(count)
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantity::Count(count) => write!(f, "{count}"),
            Quantity::Decimal(value) => write!(f, "{value}"),
            Quantity::Text(text) => f.write_str(text),
        }
    }
}

/// Missing and `null` both read as the default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Represents a manufacturing order as returned by the order service.
///
/// Only the id and the status shape the list's behavior. The display fields
/// fall back to empty values so one odd record cannot fail a whole list.
///
/// # Store Framework
/// This struct implements the [`StoreEntity`](store_framework::StoreEntity) trait,
/// allowing it to be mirrored by a [`StoreActor`](store_framework::StoreActor).
///
/// See [`impl StoreEntity for Order`](#impl-StoreEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`](crate::model::OrderCreate))
/// - Draft validation ([`OrderError::MissingField`](crate::order_store::OrderError::MissingField))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<OrderId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gauge: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: Quantity,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: OrderStatus,
}

impl Order {
    pub fn is_completed(&self) -> bool {
        self.status == OrderStatus::Completed
    }

    /// Case-insensitive substring match on the customer name. An empty query matches.
    pub fn matches_customer(&self, query: &str) -> bool {
        query.is_empty()
            || self
                .customer_name
                .to_lowercase()
                .contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_backend_document() {
        let order: Order = serde_json::from_value(json!({
            "_id": "66a1f0c2",
            "customerName": "Acme",
            "product": "Sheet",
            "gauge": "22",
            "size": "4x8",
            "quantity": 10,
            "status": "Completed",
            "__v": 0
        }))
        .unwrap();

        assert_eq!(order.id, Some(OrderId::from("66a1f0c2")));
        assert_eq!(order.customer_name, "Acme");
        assert_eq!(order.quantity, Quantity::Count(10));
        assert!(order.is_completed());
    }

    #[test]
    fn test_missing_status_defaults_to_pending() {
        let order: Order = serde_json::from_value(json!({
            "id": "7",
            "customerName": "Birch",
            "product": "Coil",
            "quantity": "12"
        }))
        .unwrap();

        assert_eq!(order.id, Some(OrderId::from("7")));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.quantity, Quantity::Text("12".into()));
        assert_eq!(order.gauge, "");
    }

    #[test]
    fn test_missing_and_null_display_fields_default() {
        let order: Order = serde_json::from_value(json!({
            "_id": "8",
            "customerName": null,
            "gauge": null,
            "quantity": null,
            "status": null
        }))
        .unwrap();

        assert_eq!(order.id, Some(OrderId::from("8")));
        assert_eq!(order.customer_name, "");
        assert_eq!(order.product, "");
        assert_eq!(order.gauge, "");
        assert!(order.quantity.is_blank());
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = serde_json::from_value::<Order>(json!({
            "_id": "1",
            "customerName": "Acme",
            "product": "Sheet",
            "status": "Shipped"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_quantity_parse() {
        assert_eq!(Quantity::parse(" 10 "), Quantity::Count(10));
        assert_eq!(Quantity::parse("2.5"), Quantity::Text("2.5".into()));
        assert!(Quantity::parse("  ").is_blank());
        assert_eq!(Quantity::Decimal(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_matches_customer_ignores_case() {
        let order: Order = serde_json::from_value(json!({
            "_id": "1",
            "customerName": "Acme Steel",
            "product": "Sheet"
        }))
        .unwrap();

        assert!(order.matches_customer("acme"));
        assert!(order.matches_customer("STEEL"));
        assert!(order.matches_customer(""));
        assert!(!order.matches_customer("birch"));
    }
}

use crate::model::{OrderStatus, Quantity};
use crate::order_store::OrderError;
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;

/// One input of the new-order form, addressed by its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    CustomerName,
    Product,
    Gauge,
    Size,
    Quantity,
}

impl OrderField {
    pub const ALL: [OrderField; 5] = [
        OrderField::CustomerName,
        OrderField::Product,
        OrderField::Gauge,
        OrderField::Size,
        OrderField::Quantity,
    ];

    /// Name used in JSON payloads and form inputs.
    pub fn name(self) -> &'static str {
        match self {
            OrderField::CustomerName => "customerName",
            OrderField::Product => "product",
            OrderField::Gauge => "gauge",
            OrderField::Size => "size",
            OrderField::Quantity => "quantity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderField::CustomerName => "Customer Name",
            OrderField::Product => "Product",
            OrderField::Gauge => "Gauge",
            OrderField::Size => "Size",
            OrderField::Quantity => "Quantity",
        }
    }
}

impl Display for OrderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OrderField {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| OrderError::UnknownField(s.to_string()))
    }
}

fn first_missing<'a>(
    fields: impl IntoIterator<Item = (OrderField, &'a str)>,
) -> Result<(), OrderError> {
    match fields
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
    {
        Some((field, _)) => Err(OrderError::MissingField(field)),
        None => Ok(()),
    }
}

/// The working record behind the new-order form. Every field starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub customer_name: String,
    pub product: String,
    pub gauge: String,
    pub size: String,
    pub quantity: String,
}

impl OrderDraft {
    pub fn get(&self, field: OrderField) -> &str {
        match field {
            OrderField::CustomerName => &self.customer_name,
            OrderField::Product => &self.product,
            OrderField::Gauge => &self.gauge,
            OrderField::Size => &self.size,
            OrderField::Quantity => &self.quantity,
        }
    }

    pub fn set(&mut self, field: OrderField, value: impl Into<String>) {
        let slot = match field {
            OrderField::CustomerName => &mut self.customer_name,
            OrderField::Product => &mut self.product,
            OrderField::Gauge => &mut self.gauge,
            OrderField::Size => &mut self.size,
            OrderField::Quantity => &mut self.quantity,
        };
        *slot = value.into();
    }

    /// Every field is required and must not be blank.
    pub fn validate(&self) -> Result<(), OrderError> {
        first_missing(OrderField::ALL.map(|field| (field, self.get(field))))
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Builds the create payload. New orders always start `Pending`.
    pub fn into_create(self) -> OrderCreate {
        OrderCreate {
            quantity: Quantity::parse(&self.quantity),
            customer_name: self.customer_name,
            product: self.product,
            gauge: self.gauge,
            size: self.size,
            status: OrderStatus::Pending,
        }
    }
}

/// Payload for `POST /orders`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub customer_name: String,
    pub product: String,
    pub gauge: String,
    pub size: String,
    pub quantity: Quantity,
    pub status: OrderStatus,
}

impl OrderCreate {
    pub fn validate(&self) -> Result<(), OrderError> {
        first_missing([
            (OrderField::CustomerName, self.customer_name.as_str()),
            (OrderField::Product, self.product.as_str()),
            (OrderField::Gauge, self.gauge.as_str()),
            (OrderField::Size, self.size.as_str()),
        ])?;
        if self.quantity.is_blank() {
            return Err(OrderError::MissingField(OrderField::Quantity));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn acme() -> OrderDraft {
        let mut draft = OrderDraft::default();
        draft.set(OrderField::CustomerName, "Acme");
        draft.set(OrderField::Product, "Sheet");
        draft.set(OrderField::Gauge, "22");
        draft.set(OrderField::Size, "4x8");
        draft.set(OrderField::Quantity, "10");
        draft
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in OrderField::ALL {
            assert_eq!(field.name().parse::<OrderField>().unwrap(), field);
        }
        assert_eq!(
            "colour".parse::<OrderField>(),
            Err(OrderError::UnknownField("colour".into()))
        );
    }

    #[test]
    fn test_validate_reports_first_blank_field() {
        let mut draft = acme();
        assert!(draft.validate().is_ok());

        draft.set(OrderField::Gauge, "   ");
        draft.set(OrderField::Quantity, "");
        assert_eq!(
            draft.validate(),
            Err(OrderError::MissingField(OrderField::Gauge))
        );
    }

    #[test]
    fn test_create_payload_shape() {
        let payload = serde_json::to_value(acme().into_create()).unwrap();
        assert_eq!(
            payload,
            json!({
                "customerName": "Acme",
                "product": "Sheet",
                "gauge": "22",
                "size": "4x8",
                "quantity": 10,
                "status": "Pending"
            })
        );
    }

    #[test]
    fn test_create_validate_blank_quantity() {
        let mut draft = acme();
        draft.set(OrderField::Quantity, " ");
        let payload = draft.into_create();
        assert_eq!(
            payload.validate(),
            Err(OrderError::MissingField(OrderField::Quantity))
        );
    }

    #[test]
    fn test_clear_resets_every_field() {
        let mut draft = acme();
        assert!(!draft.is_empty());
        draft.clear();
        assert!(draft.is_empty());
    }
}

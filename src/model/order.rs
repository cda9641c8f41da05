//! A submitted VIP order and its lifecycle state.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be stored by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for the status
//! transitions ([`OrderAction`](crate::order_actor::OrderAction)).
use crate::order_actor::OrderError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Keys owned by the stored [`Order`] envelope. Caller-supplied fields with
/// these names are dropped so they cannot shadow the real values.
const RESERVED_KEYS: [&str; 3] = ["status", "result", "submittedAt"];

/// Lifecycle status of an order. `Completed` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Processing,
    Completed,
    Failed,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, OrderStatus::Processing)
    }
}

/// One line of an order. Fields beyond the known ones are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub sku: String,
    pub quantity: u32,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The validated business payload of an order.
///
/// `extra` holds every caller field outside the known schema (for example
/// `customerEmail`); it is forwarded to the trigger and stored unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub customer_id: String,
    pub items: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Value>,
    pub total_amount: f64,
    #[serde(rename = "isVIP")]
    pub is_vip: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A stored order.
///
/// Serialized flat: the payload fields sit next to `orderId`, `status`, `result`
/// and `submittedAt`. This is also the body posted to the workflow trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    #[serde(flatten)]
    pub payload: OrderPayload,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    pub submitted_at: DateTime<Utc>,
}

impl Order {
    /// Builds the `processing` record for a freshly received submission.
    ///
    /// A caller-supplied order id is kept; otherwise a UUID v4 is generated.
    pub fn received(submission: OrderSubmission, submitted_at: DateTime<Utc>) -> Self {
        let order_id = submission
            .order_id
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        Self {
            order_id,
            payload: submission.payload,
            status: OrderStatus::Processing,
            result: None,
            submitted_at,
        }
    }
}

/// An order request that passed boundary validation.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSubmission {
    pub order_id: Option<String>,
    pub payload: OrderPayload,
}

/// Raw order request as received over HTTP.
///
/// Every field is optional here so that missing values surface as a
/// [`OrderError::ValidationError`] instead of a deserializer rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub order_id: Option<String>,
    pub customer_id: Option<String>,
    pub items: Option<Vec<LineItem>>,
    pub shipping_address: Option<Value>,
    pub total_amount: Option<f64>,
    #[serde(rename = "isVIP")]
    pub is_vip: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OrderRequest {
    /// Checks required fields and builds the internal submission.
    ///
    /// `isVIP` defaults to `true`. A blank `orderId` counts as absent. Unknown
    /// fields are carried over, except the [`Order`] envelope's own keys.
    pub fn validate(mut self) -> Result<OrderSubmission, OrderError> {
        let customer_id = self
            .customer_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| OrderError::ValidationError("customerId is required".to_string()))?;

        let items = self.items.unwrap_or_default();
        if items.is_empty() {
            return Err(OrderError::ValidationError(
                "at least one item is required".to_string(),
            ));
        }
        for item in &items {
            if item.sku.trim().is_empty() {
                return Err(OrderError::ValidationError(
                    "every item needs a sku".to_string(),
                ));
            }
            if item.quantity == 0 {
                return Err(OrderError::ValidationError(format!(
                    "item {} has zero quantity",
                    item.sku
                )));
            }
            if !item.price.is_finite() || item.price < 0.0 {
                return Err(OrderError::ValidationError(format!(
                    "item {} has an invalid price",
                    item.sku
                )));
            }
        }

        let total_amount = self
            .total_amount
            .ok_or_else(|| OrderError::ValidationError("totalAmount is required".to_string()))?;
        if !total_amount.is_finite() || total_amount < 0.0 {
            return Err(OrderError::ValidationError(
                "totalAmount must be a non-negative number".to_string(),
            ));
        }

        let order_id = self
            .order_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());
        for key in RESERVED_KEYS {
            self.extra.remove(key);
        }

        Ok(OrderSubmission {
            order_id,
            payload: OrderPayload {
                customer_id,
                items,
                shipping_address: self.shipping_address,
                total_amount,
                is_vip: self.is_vip.unwrap_or(true),
                extra: self.extra,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> OrderRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_minimal_request_defaults_to_vip() {
        let submission = request(json!({
            "customerId": "CUST-001",
            "items": [{ "sku": "PROD-001", "quantity": 2, "price": 99.99 }],
            "totalAmount": 199.98
        }))
        .validate()
        .unwrap();

        assert!(submission.payload.is_vip);
        assert!(submission.order_id.is_none());
        assert_eq!(submission.payload.items.len(), 1);
    }

    #[test]
    fn test_explicit_vip_false_is_kept() {
        let submission = request(json!({
            "customerId": "CUST-002",
            "items": [{ "sku": "PROD-003", "quantity": 1, "price": 49.99 }],
            "totalAmount": 49.99,
            "isVIP": false,
            "orderId": "ORD-7"
        }))
        .validate()
        .unwrap();

        assert!(!submission.payload.is_vip);
        assert_eq!(submission.order_id.as_deref(), Some("ORD-7"));
    }

    #[test]
    fn test_blank_order_id_counts_as_absent() {
        let submission = request(json!({
            "customerId": "CUST-002",
            "items": [{ "sku": "PROD-003", "quantity": 1, "price": 49.99 }],
            "totalAmount": 49.99,
            "orderId": "  "
        }))
        .validate()
        .unwrap();
        assert!(submission.order_id.is_none());
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let no_customer = request(json!({
            "items": [{ "sku": "PROD-001", "quantity": 1, "price": 1.0 }],
            "totalAmount": 1.0
        }))
        .validate();
        assert!(matches!(no_customer, Err(OrderError::ValidationError(_))));

        let no_items = request(json!({ "customerId": "C", "totalAmount": 1.0 })).validate();
        assert!(matches!(no_items, Err(OrderError::ValidationError(_))));

        let no_total = request(json!({
            "customerId": "C",
            "items": [{ "sku": "PROD-001", "quantity": 1, "price": 1.0 }]
        }))
        .validate();
        assert!(matches!(no_total, Err(OrderError::ValidationError(_))));

        let zero_quantity = request(json!({
            "customerId": "C",
            "items": [{ "sku": "PROD-001", "quantity": 0, "price": 1.0 }],
            "totalAmount": 0.0
        }))
        .validate();
        assert!(matches!(zero_quantity, Err(OrderError::ValidationError(_))));
    }

    #[test]
    fn test_received_order_serializes_flat() {
        let submission = OrderSubmission {
            order_id: Some("ORD-1".to_string()),
            payload: OrderPayload {
                customer_id: "CUST-001".to_string(),
                items: vec![],
                shipping_address: None,
                total_amount: 10.0,
                is_vip: true,
                extra: Default::default(),
            },
        };
        let order = Order::received(submission, Utc::now());
        let value = serde_json::to_value(&order).unwrap();

        assert_eq!(value["orderId"], "ORD-1");
        assert_eq!(value["customerId"], "CUST-001");
        assert_eq!(value["isVIP"], true);
        assert_eq!(value["status"], "processing");
        assert!(value.get("result").is_none());
        assert!(value.get("submittedAt").is_some());
    }

    #[test]
    fn test_unknown_fields_are_carried_through() {
        let submission = request(json!({
            "customerId": "CUST-001",
            "customerEmail": "vip@example.com",
            "items": [{ "sku": "PROD-001", "quantity": 1, "price": 99.99, "color": "red" }],
            "totalAmount": 99.99,
            "status": "completed",
            "submittedAt": "1999-01-01T00:00:00Z"
        }))
        .validate()
        .unwrap();

        assert_eq!(submission.payload.extra.get("customerEmail"), Some(&json!("vip@example.com")));
        assert!(!submission.payload.extra.contains_key("status"));
        assert_eq!(submission.payload.items[0].extra.get("color"), Some(&json!("red")));

        let order = Order::received(submission, Utc::now());
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["customerEmail"], "vip@example.com");
        assert_eq!(value["status"], "processing");
        assert_eq!(value["items"][0]["color"], "red");

        let back: Order = serde_json::from_value(value).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn test_received_generates_unique_ids() {
        let payload = OrderPayload {
            customer_id: "C".to_string(),
            items: vec![],
            shipping_address: None,
            total_amount: 0.0,
            is_vip: true,
            extra: Default::default(),
        };
        let a = Order::received(
            OrderSubmission { order_id: None, payload: payload.clone() },
            Utc::now(),
        );
        let b = Order::received(OrderSubmission { order_id: None, payload }, Utc::now());
        assert_ne!(a.order_id, b.order_id);
    }
}

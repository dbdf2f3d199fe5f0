use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A newly placed order, in the key order it is persisted with.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Order {
    pub order_id: String,
    pub customer: Value,
    pub items: Value,
    pub total: Value,
    pub payment_method: Value,
    pub timestamp: String,
}

/// One record of the persisted collection, kept verbatim.
///
/// Files may have been edited by hand or written by older versions, so records are not forced into
/// [`Order`]: missing ids, extra keys, or odd value types all survive reads and rewrites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct StoredOrder(pub Value);

impl StoredOrder {
    /// String form of `orderId`, `None` when the record has no comparable id.
    pub fn order_id(&self) -> Option<String> {
        match self.0.get("orderId")? {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            Value::Bool(id) => Some(id.to_string()),
            Value::Null => Some("null".to_string()),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// ids are compared by their string form
    pub fn matches(&self, query: &str) -> bool {
        self.order_id().is_some_and(|id| id == query)
    }
}

impl TryFrom<Order> for StoredOrder {
    type Error = serde_json::Error;

    fn try_from(order: Order) -> Result<Self, Self::Error> {
        serde_json::to_value(order).map(StoredOrder)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaceOrderRequest {
    pub customer: Option<Value>,
    pub items: Option<Value>,
    pub total: Option<Value>,
    pub payment_method: Option<Value>,
}

impl PlaceOrderRequest {
    /// Build the order to persist, or `None` when required data is missing.
    ///
    /// `total` only has to be present (so `0` is a valid total), the other fields must also be
    /// non-empty.
    pub fn into_order(self, order_id: String, timestamp: String) -> Option<Order> {
        let customer = self.customer.filter(is_filled)?;
        let items = self.items.filter(is_filled)?;
        let total = self.total?;
        let payment_method = self.payment_method.filter(is_filled)?;
        Some(Order {
            order_id,
            customer,
            items,
            total,
            payment_method,
            timestamp,
        })
    }
}

fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaceOrderResponse {
    pub success: bool,
    pub order_id: String,
}

use serde::{Deserialize, Serialize};

use super::delivery::DeliveryInfo;
use crate::shared::lenient;

/// Статус заказа
///
/// Wire values are matched exactly and case-sensitively. Anything the
/// storefront does not know is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Other(s) => s,
        }
    }

    /// Only completed orders count towards sales.
    pub fn is_completed(&self) -> bool {
        matches!(self, OrderStatus::Completed)
    }

    /// Confirmed and completed orders both show as "confirmed" on the order page.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, OrderStatus::Confirmed | OrderStatus::Completed)
    }

    /// Status after the confirmation switch on the order page is flipped.
    ///
    /// Switching on keeps a completed order completed, switching off always
    /// returns the order to `Pending`.
    pub fn after_confirmation_toggle(&self, confirmed: bool) -> OrderStatus {
        match (confirmed, self) {
            (false, _) => OrderStatus::Pending,
            (true, OrderStatus::Completed) => OrderStatus::Completed,
            (true, _) => OrderStatus::Confirmed,
        }
    }
}

impl From<Option<String>> for OrderStatus {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            None => OrderStatus::Pending,
            Some("Pending") => OrderStatus::Pending,
            Some("Confirmed") => OrderStatus::Confirmed,
            Some("Completed") => OrderStatus::Completed,
            Some("Cancelled") => OrderStatus::Cancelled,
            Some(other) => OrderStatus::Other(other.to_string()),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Позиция заказа
///
/// Name, price and image are copied from the catalog when the order is
/// placed and are never re-resolved afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub cake_id: String,
    #[serde(default)]
    pub cake_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub cake_price: Option<f64>,
    #[serde(default)]
    pub cake_image: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub quantity: Option<u32>,
}

impl OrderItem {
    /// Quantity used for totals: missing or zero counts as one piece.
    pub fn effective_quantity(&self) -> u32 {
        match self.quantity {
            Some(q) if q > 0 => q,
            _ => 1,
        }
    }

    /// Unit price used for totals: missing counts as zero.
    pub fn effective_price(&self) -> f64 {
        self.cake_price.unwrap_or(0.0)
    }

    /// Image reference, or `placeholder` if the snapshot has none.
    pub fn image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.cake_image.as_deref() {
            Some(image) if !image.is_empty() => image,
            _ => placeholder,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.effective_quantity() as f64 * self.effective_price()
    }
}

/// Заказ покупателя
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Empty until the order API assigns one
    #[serde(
        default,
        deserialize_with = "lenient::string_or_number",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<String>,
    #[serde(default)]
    pub order_status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_items: Option<Vec<OrderItem>>,
    #[serde(default)]
    pub payment_status: bool,
    #[serde(
        default,
        deserialize_with = "lenient::opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_info: Option<DeliveryInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
}

impl Order {
    /// Items of the order; an absent list reads as empty.
    pub fn items(&self) -> &[OrderItem] {
        self.order_items.as_deref().unwrap_or(&[])
    }

    /// Checkout total: sum of quantity × unit price over all items.
    pub fn items_total(&self) -> f64 {
        self.items().iter().map(OrderItem::line_total).sum()
    }

    pub fn set_confirmed(&mut self, confirmed: bool) {
        self.order_status = self.order_status.after_confirmation_toggle(confirmed);
    }

    pub fn mark_completed(&mut self) {
        self.order_status = OrderStatus::Completed;
    }

    pub fn set_paid(&mut self, paid: bool) {
        self.payment_status = paid;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_case_sensitive() {
        let s: OrderStatus = serde_json::from_str(r#""Completed""#).unwrap();
        assert_eq!(s, OrderStatus::Completed);

        let s: OrderStatus = serde_json::from_str(r#""completed""#).unwrap();
        assert_eq!(s, OrderStatus::Other("completed".to_string()));
        assert!(!s.is_completed());

        let s: OrderStatus = serde_json::from_str("null").unwrap();
        assert_eq!(s, OrderStatus::Pending);
    }

    #[test]
    fn test_status_round_trips_unknown_values() {
        let s = OrderStatus::Other("Refunded".to_string());
        assert_eq!(serde_json::to_string(&s).unwrap(), r#""Refunded""#);
    }

    #[test]
    fn test_confirmation_toggle() {
        assert_eq!(
            OrderStatus::Pending.after_confirmation_toggle(true),
            OrderStatus::Confirmed
        );
        assert_eq!(
            OrderStatus::Completed.after_confirmation_toggle(true),
            OrderStatus::Completed
        );
        assert_eq!(
            OrderStatus::Completed.after_confirmation_toggle(false),
            OrderStatus::Pending
        );
        assert_eq!(
            OrderStatus::Confirmed.after_confirmation_toggle(false),
            OrderStatus::Pending
        );
        assert!(OrderStatus::Completed.is_confirmed());
        assert!(!OrderStatus::Cancelled.is_confirmed());
    }

    #[test]
    fn test_order_parses_api_payload() {
        let json = r#"{
            "id": 17,
            "userId": "u-1",
            "orderStatus": "Completed",
            "paymentStatus": true,
            "totalAmount": "45.5",
            "orderItems": [
                {"cakeId": 3, "cakeName": "Pavlova", "cakePrice": 15.5, "quantity": 1},
                {"cakeId": "4", "cakeName": "Lamington", "cakePrice": "10", "quantity": 3}
            ],
            "deliveryInfo": {
                "deliveryDate": "2025-03-02",
                "deliveryTime": "12:30",
                "address": "1 Queen St",
                "recipientName": "Aroha",
                "recipientPhone": "021 000 000",
                "paymentMethod": "bank"
            }
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, "17");
        assert_eq!(order.order_status, OrderStatus::Completed);
        assert_eq!(order.items().len(), 2);
        assert_eq!(order.items()[0].cake_id, "3");
        assert_eq!(order.items()[1].cake_price, Some(10.0));
        assert_eq!(order.total_amount, Some(45.5));
        assert_eq!(order.items_total(), 45.5);
    }

    #[test]
    fn test_missing_items_read_as_empty() {
        let order: Order = serde_json::from_str(r#"{"id": "a", "orderStatus": "Completed"}"#).unwrap();
        assert!(order.order_items.is_none());
        assert!(order.items().is_empty());
        assert_eq!(order.items_total(), 0.0);
    }

    #[test]
    fn test_item_defaults() {
        let item = OrderItem {
            cake_id: "x".to_string(),
            quantity: Some(0),
            ..Default::default()
        };
        assert_eq!(item.effective_quantity(), 1);
        assert_eq!(item.effective_price(), 0.0);
        assert_eq!(item.image_or("/default-cake.jpg"), "/default-cake.jpg");

        let item = OrderItem {
            cake_image: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(item.image_or("/p.jpg"), "/p.jpg");
    }

    #[test]
    fn test_new_order_serializes_without_id() {
        let order = Order {
            total_amount: Some(12.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["orderStatus"], "Pending");
        assert_eq!(json["totalAmount"], 12.0);
    }

    #[test]
    fn test_mark_completed_and_set_confirmed() {
        let mut order = Order::default();
        order.set_confirmed(true);
        assert_eq!(order.order_status, OrderStatus::Confirmed);
        order.mark_completed();
        assert_eq!(order.order_status, OrderStatus::Completed);
        order.set_confirmed(false);
        assert_eq!(order.order_status, OrderStatus::Pending);

        order.set_paid(true);
        assert!(order.payment_status);
        order.set_paid(false);
        assert!(!order.payment_status);
    }
}

use serde::{Deserialize, Serialize};

use super::aggregate::{Order, OrderItem};
use super::delivery::{DeliveryInfo, DeliveryValidationError};
use crate::shared::lenient;

/// Body of `POST /api/a001/orders/:id/confirmation`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationRequest {
    pub confirmed: bool,
}

/// Body of `POST /api/a001/orders/:id/payment`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub paid: bool,
}

/// Checkout form submitted to `POST /api/a001/orders`
///
/// The total is not accepted from the client; it is computed from the items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default, deserialize_with = "lenient::opt_string_or_number")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    pub delivery_info: DeliveryInfo,
}

/// Ответ на изменение статуса заказа
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusResponse {
    pub order: Order,
    /// State of the confirmation switch (confirmed or completed)
    pub confirmed: bool,
}

impl From<Order> for OrderStatusResponse {
    fn from(order: Order) -> Self {
        let confirmed = order.order_status.is_confirmed();
        Self { order, confirmed }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryFieldError {
    pub field: String,
    pub message: String,
}

impl From<&DeliveryValidationError> for DeliveryFieldError {
    fn from(e: &DeliveryValidationError) -> Self {
        Self {
            field: e.field().to_string(),
            message: e.to_string(),
        }
    }
}

/// Result of checking the checkout delivery form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryValidationResponse {
    pub valid: bool,
    pub errors: Vec<DeliveryFieldError>,
}

impl DeliveryValidationResponse {
    pub fn from_result(result: Result<(), Vec<DeliveryValidationError>>) -> Self {
        match result {
            Ok(()) => Self {
                valid: true,
                errors: vec![],
            },
            Err(errors) => Self {
                valid: false,
                errors: errors.iter().map(DeliveryFieldError::from).collect(),
            },
        }
    }
}

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use contracts::domain::a001_order::aggregate::Order;
use contracts::domain::a001_order::delivery::{validate_delivery, DeliveryInfo};
use contracts::domain::a001_order::dto::{
    ConfirmationRequest, CreateOrderRequest, DeliveryValidationResponse, OrderStatusResponse,
    PaymentRequest,
};

use super::{bearer_token, store_error_status};
use crate::domain::a001_order::service::{self, CreateOrderError};
use crate::state::AppState;

/// Ответ на оформление заказа с ошибкой
#[derive(Debug)]
pub enum CreateOrderRejection {
    Status(StatusCode),
    Invalid(DeliveryValidationResponse),
}

impl IntoResponse for CreateOrderRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Status(status) => status.into_response(),
            Self::Invalid(body) => (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response(),
        }
    }
}

/// POST /api/a001/orders
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), CreateOrderRejection> {
    match service::create_order(
        state.order_store.as_ref(),
        request,
        state.today(),
        bearer_token(&headers),
    )
    .await
    {
        Ok(order) => Ok((StatusCode::CREATED, Json(order))),
        Err(CreateOrderError::NoItems) => {
            tracing::debug!("Order rejected: no items");
            Err(CreateOrderRejection::Status(StatusCode::UNPROCESSABLE_ENTITY))
        }
        Err(CreateOrderError::InvalidDelivery(errors)) => {
            tracing::debug!("Order rejected: {} delivery errors", errors.len());
            Err(CreateOrderRejection::Invalid(DeliveryValidationResponse::from_result(
                Err(errors),
            )))
        }
        Err(CreateOrderError::Store(e)) => {
            tracing::error!("Failed to create order: {}", e);
            Err(CreateOrderRejection::Status(store_error_status(&e)))
        }
    }
}

/// POST /api/a001/orders/validate_delivery
pub async fn validate_delivery_info(
    State(state): State<Arc<AppState>>,
    Json(info): Json<DeliveryInfo>,
) -> Json<DeliveryValidationResponse> {
    let response = DeliveryValidationResponse::from_result(validate_delivery(&info, state.today()));
    if !response.valid {
        tracing::debug!("Delivery info rejected: {} errors", response.errors.len());
    }
    Json(response)
}

/// POST /api/a001/orders/:id/confirmation
pub async fn set_confirmation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(request): Json<ConfirmationRequest>,
) -> Result<Json<OrderStatusResponse>, StatusCode> {
    match service::set_confirmed(
        state.order_store.as_ref(),
        &id,
        request.confirmed,
        bearer_token(&headers),
    )
    .await
    {
        Ok(order) => Ok(Json(OrderStatusResponse::from(order))),
        Err(e) => {
            tracing::error!("Failed to update confirmation of order {}: {}", id, e);
            Err(store_error_status(&e))
        }
    }
}

/// POST /api/a001/orders/:id/complete
pub async fn complete_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<OrderStatusResponse>, StatusCode> {
    match service::mark_completed(state.order_store.as_ref(), &id, bearer_token(&headers)).await {
        Ok(order) => Ok(Json(OrderStatusResponse::from(order))),
        Err(e) => {
            tracing::error!("Failed to complete order {}: {}", id, e);
            Err(store_error_status(&e))
        }
    }
}

/// POST /api/a001/orders/:id/payment
pub async fn set_payment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<OrderStatusResponse>, StatusCode> {
    match service::set_paid(state.order_store.as_ref(), &id, request.paid, bearer_token(&headers)).await {
        Ok(order) => Ok(Json(OrderStatusResponse::from(order))),
        Err(e) => {
            tracing::error!("Failed to update payment of order {}: {}", id, e);
            Err(store_error_status(&e))
        }
    }
}

/// DELETE /api/a001/orders/:id
pub async fn delete_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> StatusCode {
    match service::delete_order(state.order_store.as_ref(), &id, bearer_token(&headers)).await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(e) => {
            tracing::error!("Failed to delete order {}: {}", id, e);
            store_error_status(&e)
        }
    }
}

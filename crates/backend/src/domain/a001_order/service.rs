use chrono::NaiveDate;
use contracts::domain::a001_order::aggregate::{Order, OrderStatus};
use contracts::domain::a001_order::delivery::{validate_delivery, DeliveryValidationError};
use contracts::domain::a001_order::dto::CreateOrderRequest;
use thiserror::Error;

use crate::shared::order_store::{OrderStore, OrderStoreError};

#[derive(Debug, Error)]
pub enum CreateOrderError {
    #[error("Order has no items")]
    NoItems,

    #[error("Delivery info is invalid ({} errors)", .0.len())]
    InvalidDelivery(Vec<DeliveryValidationError>),

    #[error(transparent)]
    Store(#[from] OrderStoreError),
}

/// Оформление заказа из формы checkout
///
/// The total is always recomputed from the items; new orders start
/// `Pending` and unpaid.
pub async fn create_order(
    store: &dyn OrderStore,
    request: CreateOrderRequest,
    today: NaiveDate,
    token: Option<&str>,
) -> Result<Order, CreateOrderError> {
    if request.order_items.is_empty() {
        return Err(CreateOrderError::NoItems);
    }
    validate_delivery(&request.delivery_info, today).map_err(CreateOrderError::InvalidDelivery)?;

    let mut order = Order {
        user_id: request.user_id,
        order_status: OrderStatus::Pending,
        order_items: Some(request.order_items),
        payment_status: false,
        delivery_info: Some(request.delivery_info),
        ..Default::default()
    };
    order.total_amount = Some(order.items_total());

    let created = store.create_order(&order, token).await?;
    tracing::info!(
        "Order {} created: {} items, total {}",
        created.id,
        created.items().len(),
        crate::shared::format::format_money(order.items_total())
    );
    Ok(created)
}

/// Переключатель "подтверждён" на странице заказа
pub async fn set_confirmed(
    store: &dyn OrderStore,
    id: &str,
    confirmed: bool,
    token: Option<&str>,
) -> Result<Order, OrderStoreError> {
    let mut order = store.get_order(id, token).await?;
    let previous = order.order_status.clone();
    order.set_confirmed(confirmed);

    tracing::info!(
        "Order {}: status {} -> {} (confirmed = {})",
        id,
        previous,
        order.order_status,
        confirmed
    );

    store.update_order(&order, token).await
}

/// Кнопка "Done": заказ выполнен и попадает в статистику продаж
pub async fn mark_completed(
    store: &dyn OrderStore,
    id: &str,
    token: Option<&str>,
) -> Result<Order, OrderStoreError> {
    let mut order = store.get_order(id, token).await?;
    let previous = order.order_status.clone();
    order.mark_completed();

    tracing::info!("Order {}: status {} -> {}", id, previous, order.order_status);

    store.update_order(&order, token).await
}

/// Переключатель оплаты на странице заказа
pub async fn set_paid(
    store: &dyn OrderStore,
    id: &str,
    paid: bool,
    token: Option<&str>,
) -> Result<Order, OrderStoreError> {
    let mut order = store.get_order(id, token).await?;
    order.set_paid(paid);

    tracing::info!("Order {}: paid = {}", id, paid);

    store.update_order(&order, token).await
}

/// Отмена заказа: запись удаляется из хранилища
pub async fn delete_order(
    store: &dyn OrderStore,
    id: &str,
    token: Option<&str>,
) -> Result<(), OrderStoreError> {
    store.delete_order(id, token).await?;
    tracing::info!("Order {} deleted", id);
    Ok(())
}

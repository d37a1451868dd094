use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // ORDERS
        // ========================================
        .route("/api/a001/orders", post(handlers::a001_order::create_order))
        .route("/api/a001/orders/:id", delete(handlers::a001_order::delete_order))
        .route(
            "/api/a001/orders/validate_delivery",
            post(handlers::a001_order::validate_delivery_info),
        )
        .route(
            "/api/a001/orders/:id/confirmation",
            post(handlers::a001_order::set_confirmation),
        )
        .route(
            "/api/a001/orders/:id/payment",
            post(handlers::a001_order::set_payment),
        )
        .route(
            "/api/a001/orders/:id/complete",
            post(handlers::a001_order::complete_order),
        )
        // ========================================
        // DASHBOARDS
        // ========================================
        // D100 Sales Statistics
        .route(
            "/api/d100/sales_statistics",
            get(handlers::d100_sales_statistics::get_sales_statistics)
                .post(handlers::d100_sales_statistics::compute_sales_statistics),
        )
        .with_state(state)
}

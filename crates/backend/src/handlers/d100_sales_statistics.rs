use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};
use contracts::dashboards::d100_sales_statistics::SalesStatisticsResponse;
use contracts::domain::a001_order::aggregate::Order;

use super::{bearer_token, store_error_status};
use crate::dashboards::d100_sales_statistics::service;
use crate::shared::format::format_money;
use crate::state::AppState;

/// GET /api/d100/sales_statistics
pub async fn get_sales_statistics(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<SalesStatisticsResponse>, StatusCode> {
    tracing::info!("D100 Dashboard: Loading orders for sales statistics");

    match service::get_sales_statistics(
        state.order_store.as_ref(),
        bearer_token(&headers),
        &state.sales_options,
    )
    .await
    {
        Ok(response) => {
            tracing::info!(
                "D100 Dashboard: Returning {} products, {} sold, revenue {}",
                response.overview.product_types,
                response.overview.total_quantity_sold,
                format_money(response.overview.total_revenue)
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D100 Dashboard: Failed to load orders: {}", e);
            Err(store_error_status(&e))
        }
    }
}

/// POST /api/d100/sales_statistics
///
/// Ranks an order snapshot supplied by the caller; no order API calls.
pub async fn compute_sales_statistics(
    State(state): State<Arc<AppState>>,
    Json(orders): Json<Vec<Order>>,
) -> Json<SalesStatisticsResponse> {
    let response = service::build_report(&orders, &state.sales_options);
    tracing::info!(
        "D100 Dashboard: Ranked {} products from {} submitted orders",
        response.products.len(),
        orders.len()
    );
    Json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_sales_statistics::service::SalesStatisticsOptions;
    use crate::shared::order_store::memory::InMemoryOrderStore;
    use contracts::dashboards::d100_sales_statistics::Trend;

    fn orders() -> Vec<Order> {
        serde_json::from_str(
            r#"[
                {"id": 1, "orderStatus": "Completed",
                 "orderItems": [{"cakeId": "A", "cakeName": "Pavlova", "cakePrice": 5, "quantity": 1}]},
                {"id": 2, "orderStatus": "Completed",
                 "orderItems": [{"cakeId": "B", "cakeName": "Lamington", "cakePrice": 3, "quantity": 5}]},
                {"id": 3, "orderStatus": "Pending",
                 "orderItems": [{"cakeId": "A", "cakePrice": 5, "quantity": 10}]},
                {"id": 4, "orderStatus": "Completed"}
            ]"#,
        )
        .unwrap()
    }

    fn state(store: InMemoryOrderStore) -> Arc<AppState> {
        AppState::new(Arc::new(store), SalesStatisticsOptions::default())
    }

    #[tokio::test]
    async fn test_get_sales_statistics() {
        let state = state(InMemoryOrderStore::new(orders()));
        let Json(response) = get_sales_statistics(State(state), HeaderMap::new())
            .await
            .unwrap();

        let ids: Vec<&str> = response.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
        assert_eq!(response.products[0].total_revenue, 15.0);
        assert_eq!(response.products[1].trend, Trend::Up);
        assert_eq!(response.overview.total_quantity_sold, 6);
    }

    #[tokio::test]
    async fn test_get_sales_statistics_store_failure() {
        let state = state(InMemoryOrderStore::failing(500));
        let result = get_sales_statistics(State(state), HeaderMap::new()).await;
        assert_eq!(result.unwrap_err(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_compute_sales_statistics_from_body() {
        let state = state(InMemoryOrderStore::failing(500));
        let Json(response) = compute_sales_statistics(State(state), Json(orders())).await;
        assert_eq!(response.products.len(), 2);
        assert_eq!(response.overview.total_revenue, 20.0);

        let state = AppState::new(
            Arc::new(InMemoryOrderStore::default()),
            SalesStatisticsOptions::default(),
        );
        let Json(response) = compute_sales_statistics(State(state), Json(vec![])).await;
        assert!(response.products.is_empty());
    }
}

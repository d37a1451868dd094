use std::collections::HashMap;

use contracts::dashboards::d100_sales_statistics::{
    ProductSalesStat, SalesOverview, SalesStatisticsResponse, Trend, DEFAULT_CAKE_IMAGE,
};
use contracts::domain::a001_order::aggregate::Order;

use crate::shared::config::SalesStatisticsConfig;
use crate::shared::order_store::{OrderStore, OrderStoreError};

/// Defaults applied while aggregating order snapshots
#[derive(Debug, Clone, PartialEq)]
pub struct SalesStatisticsOptions {
    /// Used when the first item seen for a product carries no image
    pub default_image: String,
}

impl Default for SalesStatisticsOptions {
    fn default() -> Self {
        Self {
            default_image: DEFAULT_CAKE_IMAGE.to_string(),
        }
    }
}

impl From<&SalesStatisticsConfig> for SalesStatisticsOptions {
    fn from(config: &SalesStatisticsConfig) -> Self {
        Self {
            default_image: config.default_image.clone(),
        }
    }
}

/// Running totals for one product, in first-seen order
struct ProductTotals {
    id: String,
    name: String,
    image: String,
    total_sold: u64,
    total_revenue: f64,
}

/// Ranked sales per product over completed orders, with default options.
pub fn compute_sales_statistics(orders: &[Order]) -> Vec<ProductSalesStat> {
    compute_sales_statistics_with(orders, &SalesStatisticsOptions::default())
}

/// Ranked sales per product over completed orders.
///
/// Only orders whose status is exactly `Completed` count. Products are ranked
/// by quantity sold, descending; ties keep the order in which the products
/// were first seen.
pub fn compute_sales_statistics_with(
    orders: &[Order],
    options: &SalesStatisticsOptions,
) -> Vec<ProductSalesStat> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<ProductTotals> = Vec::new();

    for order in orders.iter().filter(|o| o.order_status.is_completed()) {
        for item in order.items() {
            let pos = *positions.entry(item.cake_id.as_str()).or_insert_with(|| {
                totals.push(ProductTotals {
                    id: item.cake_id.clone(),
                    name: item.cake_name.clone().unwrap_or_default(),
                    image: item.image_or(&options.default_image).to_string(),
                    total_sold: 0,
                    total_revenue: 0.0,
                });
                totals.len() - 1
            });

            let quantity = item.effective_quantity();
            let entry = &mut totals[pos];
            entry.total_sold += u64::from(quantity);
            entry.total_revenue += f64::from(quantity) * item.effective_price();
        }
    }

    // sort_by is stable
    totals.sort_by(|a, b| b.total_sold.cmp(&a.total_sold));

    totals
        .into_iter()
        .enumerate()
        .map(|(index, t)| {
            let rank = index + 1;
            let trend = Trend::from_rank(rank);
            ProductSalesStat {
                id: t.id,
                name: t.name,
                image: t.image,
                total_sold: t.total_sold,
                total_revenue: t.total_revenue,
                rank,
                trend,
                trend_label: trend.label().to_string(),
            }
        })
        .collect()
}

/// Totals over an already ranked list
pub fn summarize(stats: &[ProductSalesStat]) -> SalesOverview {
    SalesOverview {
        product_types: stats.len(),
        total_quantity_sold: stats.iter().map(|s| s.total_sold).sum(),
        total_revenue: stats.iter().map(|s| s.total_revenue).sum(),
    }
}

pub fn build_report(orders: &[Order], options: &SalesStatisticsOptions) -> SalesStatisticsResponse {
    let products = compute_sales_statistics_with(orders, options);
    let overview = summarize(&products);
    SalesStatisticsResponse { products, overview }
}

/// Load the current order collection and build the report from it
pub async fn get_sales_statistics(
    store: &dyn OrderStore,
    token: Option<&str>,
    options: &SalesStatisticsOptions,
) -> Result<SalesStatisticsResponse, OrderStoreError> {
    let orders = store.list_orders(token).await?;
    Ok(build_report(&orders, options))
}

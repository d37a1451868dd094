use std::sync::Arc;

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::dashboards::d100_sales_statistics::service::SalesStatisticsOptions;
use crate::shared::config::Config;
use crate::shared::order_store::{HttpOrderStore, OrderStore};

pub struct AppState {
    pub order_store: Arc<dyn OrderStore>,
    pub sales_options: SalesStatisticsOptions,
    /// Zone of the bakery, used for "today" in delivery checks
    pub timezone: Tz,
}

impl AppState {
    pub fn new(order_store: Arc<dyn OrderStore>, sales_options: SalesStatisticsOptions) -> Arc<Self> {
        Self::with_timezone(order_store, sales_options, chrono_tz::Pacific::Auckland)
    }

    pub fn with_timezone(
        order_store: Arc<dyn OrderStore>,
        sales_options: SalesStatisticsOptions,
        timezone: Tz,
    ) -> Arc<Self> {
        Arc::new(Self {
            order_store,
            sales_options,
            timezone,
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Arc<Self>> {
        let order_store = HttpOrderStore::new(&config.order_store)?;
        let timezone = config.server.tz()?;
        tracing::info!("Order API: {}", config.order_store.base_url);
        tracing::info!("Bakery timezone: {}", timezone);

        Ok(Self::with_timezone(
            Arc::new(order_store),
            SalesStatisticsOptions::from(&config.sales_statistics),
            timezone,
        ))
    }

    /// Calendar date at the bakery right now
    pub fn today(&self) -> NaiveDate {
        chrono::Utc::now().with_timezone(&self.timezone).date_naive()
    }
}

pub mod http;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use contracts::domain::a001_order::aggregate::Order;
use thiserror::Error;

pub use http::HttpOrderStore;

/// Ошибки обращения к хранилищу заказов
#[derive(Debug, Error)]
pub enum OrderStoreError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Invalid order id: {0:?}")]
    InvalidId(String),

    #[error("Order API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to parse order API response: {0}")]
    Decode(String),
}

/// Remote collaborator that owns the order collection.
///
/// `token` is the caller's bearer token, forwarded as-is.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn list_orders(&self, token: Option<&str>) -> Result<Vec<Order>, OrderStoreError>;

    async fn get_order(&self, id: &str, token: Option<&str>) -> Result<Order, OrderStoreError>;

    /// Place a new order, returning it with the id assigned by the store.
    async fn create_order(&self, order: &Order, token: Option<&str>)
        -> Result<Order, OrderStoreError>;

    /// Replace the stored order, returning the stored version.
    async fn update_order(&self, order: &Order, token: Option<&str>)
        -> Result<Order, OrderStoreError>;

    async fn delete_order(&self, id: &str, token: Option<&str>) -> Result<(), OrderStoreError>;
}

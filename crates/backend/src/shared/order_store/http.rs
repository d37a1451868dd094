use async_trait::async_trait;
use contracts::domain::a001_order::aggregate::Order;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{OrderStore, OrderStoreError};
use crate::shared::config::OrderStoreConfig;

/// HTTP-клиент для REST API пекарни (`/api/order`)
pub struct HttpOrderStore {
    client: reqwest::Client,
    base_url: String,
}

/// Error body the API sends with non-success responses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

impl HttpOrderStore {
    pub fn new(config: &OrderStoreConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn orders_url(&self) -> String {
        format!("{}/api/order", self.base_url)
    }

    /// URL of a single order. The id becomes exactly one path segment:
    /// `?`, `#`, `/` and friends are percent-encoded, and dot segments are
    /// refused since URL normalization would resolve them even when encoded.
    fn order_url(&self, id: &str) -> Result<String, OrderStoreError> {
        let trimmed = id.trim();
        let is_dot_segment = matches!(
            trimmed.to_ascii_lowercase().as_str(),
            "." | ".." | "%2e" | ".%2e" | "%2e." | "%2e%2e"
        );
        if trimmed.is_empty() || is_dot_segment {
            return Err(OrderStoreError::InvalidId(id.to_string()));
        }

        Ok(format!("{}/api/order/{}", self.base_url, urlencoding::encode(id)))
    }

    fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) if !token.is_empty() => request.bearer_auth(token),
            _ => request,
        }
    }

    /// Turn a non-success response into `OrderStoreError::Api`, preferring the
    /// API's own `message` field over the raw body.
    async fn api_error(response: Response) -> OrderStoreError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or(body);
        tracing::error!("Order API request failed with status {}: {}", status, message);
        OrderStoreError::Api { status, message }
    }

    /// `NotFound` for 404, `Api` for any other failure status.
    async fn check(response: Response, id: &str) -> Result<Response, OrderStoreError> {
        if response.status() == StatusCode::NOT_FOUND {
            return Err(OrderStoreError::NotFound(id.to_string()));
        }
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(response)
    }

    fn decode<T: DeserializeOwned>(body: &str) -> Result<T, OrderStoreError> {
        serde_json::from_str::<T>(body).map_err(|e| {
            let preview: String = body.chars().take(300).collect();
            tracing::error!("Failed to parse order API response: {}. Body: {}", e, preview);
            OrderStoreError::Decode(e.to_string())
        })
    }

    /// The API does not always echo the order back after a write
    fn stored_or(body: &str, sent: &Order) -> Order {
        match serde_json::from_str::<Order>(body) {
            Ok(stored) if !stored.id.is_empty() => stored,
            _ => sent.clone(),
        }
    }
}

#[async_trait]
impl OrderStore for HttpOrderStore {
    async fn list_orders(&self, token: Option<&str>) -> Result<Vec<Order>, OrderStoreError> {
        let url = self.orders_url();
        tracing::debug!("GET {}", url);

        let response = Self::authorize(self.client.get(&url), token).send().await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let body = response.text().await?;
        let orders: Vec<Order> = Self::decode(&body)?;
        tracing::info!("Loaded {} orders from order API", orders.len());
        Ok(orders)
    }

    async fn get_order(&self, id: &str, token: Option<&str>) -> Result<Order, OrderStoreError> {
        let url = self.order_url(id)?;
        tracing::debug!("GET {}", url);

        let response = Self::authorize(self.client.get(&url), token).send().await?;
        let body = Self::check(response, id).await?.text().await?;
        Self::decode(&body)
    }

    async fn create_order(
        &self,
        order: &Order,
        token: Option<&str>,
    ) -> Result<Order, OrderStoreError> {
        let url = self.orders_url();
        tracing::debug!("POST {}", url);

        let response = Self::authorize(self.client.post(&url), token)
            .json(order)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let body = response.text().await?;
        let created: Order = Self::decode(&body)?;
        tracing::info!("Order {} created", created.id);
        Ok(created)
    }

    async fn update_order(
        &self,
        order: &Order,
        token: Option<&str>,
    ) -> Result<Order, OrderStoreError> {
        let url = self.order_url(&order.id)?;
        tracing::debug!("PUT {}", url);

        let response = Self::authorize(self.client.put(&url), token)
            .json(order)
            .send()
            .await?;
        let body = Self::check(response, &order.id).await?.text().await?;
        Ok(Self::stored_or(&body, order))
    }

    async fn delete_order(&self, id: &str, token: Option<&str>) -> Result<(), OrderStoreError> {
        let url = self.order_url(id)?;
        tracing::debug!("DELETE {}", url);

        let response = Self::authorize(self.client.delete(&url), token).send().await?;
        Self::check(response, id).await?;
        Ok(())
    }
}

pub mod a001_order;
pub mod d100_sales_statistics;

use axum::http::{header, HeaderMap, StatusCode};

use crate::shared::order_store::OrderStoreError;

/// Bearer token from the `Authorization` header, forwarded to the order API
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

pub fn store_error_status(e: &OrderStoreError) -> StatusCode {
    match e {
        OrderStoreError::NotFound(_) => StatusCode::NOT_FOUND,
        OrderStoreError::InvalidId(_) => StatusCode::BAD_REQUEST,
        OrderStoreError::Api { status: 401, .. } => StatusCode::UNAUTHORIZED,
        OrderStoreError::Api { status: 403, .. } => StatusCode::FORBIDDEN,
        OrderStoreError::Api { .. } | OrderStoreError::Network(_) | OrderStoreError::Decode(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers), Some("abc.def"));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic xyz"));
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_store_error_status() {
        assert_eq!(
            store_error_status(&OrderStoreError::NotFound("1".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            store_error_status(&OrderStoreError::InvalidId("..".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            store_error_status(&OrderStoreError::Api {
                status: 401,
                message: "expired".into()
            }),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            store_error_status(&OrderStoreError::Decode("eof".into())),
            StatusCode::BAD_GATEWAY
        );
    }
}

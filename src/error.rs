use std::any::Any;

use axum::{
    extract::rejection::{BytesRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub const ITEM_NOT_FOUND: &str = "Item not found";
pub const ROUTE_NOT_FOUND: &str = "Route not found";
pub const INTERNAL_ERROR: &str = "Something went wrong!";
pub const INVALID_PATH: &str = "Invalid item name in path";

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Every failure a handler can produce maps to one variant here, and every
/// variant renders as a JSON `{"error": ...}` body. Internal details are
/// logged and never sent to the client.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed item fields in the request body
    Validation(String),
    /// Path segment could not be decoded
    InvalidPath(String),
    /// No item with the given name
    ItemNotFound(String),
    /// No route matches the method and path
    RouteNotFound,
    /// Anything unexpected
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InvalidPath(detail) => {
                tracing::info!("Rejected path parameter: {}", detail);
                (StatusCode::BAD_REQUEST, INVALID_PATH.to_string())
            }
            ApiError::ItemNotFound(name) => {
                tracing::debug!("Item not found: {}", name);
                (StatusCode::NOT_FOUND, ITEM_NOT_FOUND.to_string())
            }
            ApiError::RouteNotFound => (StatusCode::NOT_FOUND, ROUTE_NOT_FOUND.to_string()),
            ApiError::Internal(err) => {
                tracing::error!("Unhandled error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR.to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidPath(rejection.body_text())
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Internal(anyhow::anyhow!(
            "failed to read request body: {}",
            rejection.body_text()
        ))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        let err = anyhow::Error::new(err).context("failed to parse request body as JSON");
        ApiError::Internal(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

/// Panic hook for `CatchPanicLayer`: renders a caught panic as a 500
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(anyhow::anyhow!("handler panicked: {}", detail)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(err: ApiError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_validation_error_is_bad_request() {
        let (status, body) = render(ApiError::Validation("bad price".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "bad price");
    }

    #[tokio::test]
    async fn test_not_found_errors_use_fixed_messages() {
        let (status, body) = render(ApiError::ItemNotFound("ghost".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, ITEM_NOT_FOUND);

        let (status, body) = render(ApiError::RouteNotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, ROUTE_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_path_uses_fixed_message() {
        let err = ApiError::InvalidPath("Invalid UTF-8 in `name`".to_string());
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, INVALID_PATH);
    }

    #[tokio::test]
    async fn test_json_parse_error_hides_detail() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("{bad")
            .unwrap_err()
            .into();
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, INTERNAL_ERROR);
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let err: ApiError = anyhow::anyhow!("connection pool exhausted").into();
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, INTERNAL_ERROR);
    }

    #[tokio::test]
    async fn test_panic_payload_becomes_internal_error() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new(42_u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

use crate::error::ApiError;
use axum::http::{Method, Uri};

/// Fallback for any method/path pair without a handler
pub async fn not_found_handler(method: Method, uri: Uri) -> ApiError {
    tracing::info!("No route for {} {}", method, uri);
    ApiError::RouteNotFound
}

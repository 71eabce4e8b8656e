use crate::error::{ApiError, ErrorResponse};
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::rejection::PathRejection, extract::Path, extract::State, http::StatusCode, Json,
};

/// GET /items/{name} handler - Fetch a single item
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("name" = String, Path, description = "Exact item name; the first match is returned")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, description = "Name in path is not valid UTF-8", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Path(name) = path?;

    match state.store.find(&name).await {
        Some(item) => {
            tracing::debug!("Retrieved item '{}'", name);
            Ok((StatusCode::OK, Json(item)))
        }
        None => {
            tracing::info!("Item not found: '{}'", name);
            Err(ApiError::ItemNotFound(name))
        }
    }
}

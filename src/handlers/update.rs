use crate::error::{ApiError, ErrorResponse};
use crate::models::{decode_body, ItemPatch, UpdateItemRequest, UpdatedResponse};
use crate::routes;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::rejection::{BytesRejection, PathRejection},
    extract::Path,
    extract::State,
    http::HeaderMap,
    http::StatusCode,
    Json,
};

/// PATCH /items/{name} handler - Partially update an item
///
/// Only the fields present in the body are overwritten; omitted fields keep
/// their previous value. The item is looked up first, so a missing item is a
/// 404 whatever the body holds; the body is only read once a match exists.
#[utoipa::path(
    patch,
    path = routes::ITEM,
    params(
        ("name" = String, Path, description = "Exact item name; the first match is updated")
    ),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Item updated", body = UpdatedResponse),
        (status = 400, description = "Malformed name/price", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Body is not valid JSON", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<UpdatedResponse>), ApiError> {
    let Path(name) = path?;

    let build_patch = || -> Result<ItemPatch, ApiError> {
        let request: UpdateItemRequest = decode_body(&headers, &body?)?;
        request.into_patch()
    };

    match state.store.update(&name, build_patch).await {
        Some(Err(err)) => Err(err),
        Some(Ok(updated)) => {
            tracing::info!(
                "Updated item '{}' -> '{}' at price {}",
                name,
                updated.name,
                updated.price
            );
            Ok((StatusCode::OK, Json(UpdatedResponse { updated })))
        }
        None => {
            tracing::info!("Item not found for update: '{}'", name);
            Err(ApiError::ItemNotFound(name))
        }
    }
}

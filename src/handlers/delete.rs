use crate::error::{ApiError, ErrorResponse};
use crate::models::DeletedResponse;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::rejection::PathRejection, extract::Path, extract::State, http::StatusCode, Json,
};

/// DELETE /items/{name} handler - Remove an item
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("name" = String, Path, description = "Exact item name; the first match is removed")
    ),
    responses(
        (status = 200, description = "Item deleted", body = DeletedResponse),
        (status = 400, description = "Name in path is not valid UTF-8", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<(StatusCode, Json<DeletedResponse>), ApiError> {
    let Path(name) = path?;

    let Some(removed) = state.store.remove(&name).await else {
        tracing::info!("Item not found for delete: '{}'", name);
        return Err(ApiError::ItemNotFound(name));
    };

    tracing::info!("Deleted item '{}' (price {})", removed.name, removed.price);
    Ok((
        StatusCode::OK,
        Json(DeletedResponse {
            message: "Deleted".to_string(),
        }),
    ))
}

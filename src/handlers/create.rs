use crate::error::{ApiError, ErrorResponse};
use crate::models::{decode_body, AddedResponse, CreateItemRequest};
use crate::routes;
use crate::state::AppState;
use axum::{
    body::Bytes, extract::rejection::BytesRejection, extract::State, http::HeaderMap,
    http::StatusCode, Json,
};

/// POST /items handler - Add an item to the list
///
/// Both `name` and `price` are required. `price` may be a number or a string
/// holding a number; it is stored as a float. A body not sent as JSON reads
/// as an empty object.
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item added", body = AddedResponse),
        (status = 400, description = "Missing or malformed name/price", body = ErrorResponse),
        (status = 500, description = "Body is not valid JSON", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<AddedResponse>), ApiError> {
    let request: CreateItemRequest = decode_body(&headers, &body?)?;
    let item = request.into_item()?;

    let added = state.store.insert(item).await;

    tracing::info!("Added item '{}' at price {}", added.name, added.price);
    Ok((StatusCode::CREATED, Json(AddedResponse { added })))
}

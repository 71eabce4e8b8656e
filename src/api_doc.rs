use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{
    AddedResponse, CreateItemRequest, DeletedResponse, HealthResponse, Item, UpdateItemRequest,
    UpdatedResponse,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "shopping-list-api",
        version = "0.1.0",
        description = "A small shopping list kept in memory, with CRUD over named, priced items"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::create::create_handler,
        handlers::get::get_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Item,
            CreateItemRequest,
            UpdateItemRequest,
            AddedResponse,
            UpdatedResponse,
            DeletedResponse,
            HealthResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "items", description = "Shopping list operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_documents_every_item_operation() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = &doc["paths"];

        assert!(paths["/items"]["get"].is_object());
        assert!(paths["/items"]["post"].is_object());
        assert!(paths["/items/{name}"]["get"].is_object());
        assert!(paths["/items/{name}"]["patch"].is_object());
        assert!(paths["/items/{name}"]["delete"].is_object());
        assert!(paths["/health"]["get"].is_object());
        assert!(doc["components"]["schemas"]["Item"].is_object());
    }
}

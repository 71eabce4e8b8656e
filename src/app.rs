use axum::{
    routing::{get, MethodRouter},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::config::Config;
use crate::error::handle_panic;
use crate::handlers;
use crate::routes;
use crate::state::AppState;

/// Build the full application router
///
/// Unknown paths and unsupported methods on known paths both fall through to
/// the route-not-found handler. Panics in any handler are turned into a 500.
pub fn create_router(state: AppState, config: &Config) -> Router {
    let mut router = Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::ITEMS, collection_routes())
        .route(routes::ITEMS_SLASH, collection_routes())
        .route(
            routes::ITEM,
            get(handlers::get_handler)
                .patch(handlers::update_handler)
                .delete(handlers::delete_handler)
                .fallback(handlers::not_found_handler),
        )
        .with_state(state);

    if config.swagger_ui {
        router = router.merge(
            SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()),
        );
    }

    with_middleware(router.fallback(handlers::not_found_handler))
}

/// `/items` and `/items/` serve the same list
fn collection_routes() -> MethodRouter<AppState> {
    get(handlers::list_handler)
        .post(handlers::create_handler)
        .fallback(handlers::not_found_handler)
}

fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

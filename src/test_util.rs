// Shared helpers for driving the router in-process from tests

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value as JsonValue;
use tower::ServiceExt;

use crate::app::create_router;
use crate::config::Config;
use crate::models::Item;
use crate::state::AppState;
use crate::store::ItemStore;

pub fn item(name: &str, price: f64) -> Item {
    Item {
        name: name.to_string(),
        price,
    }
}

/// Router over a fresh store seeded with `items`; Swagger UI is left off
pub fn test_app(items: Vec<Item>) -> (Router, ItemStore) {
    let store = ItemStore::with_items(items);
    let config = Config {
        swagger_ui: false,
        ..Config::default()
    };
    let app = create_router(AppState::new(store.clone()), &config);
    (app, store)
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, JsonValue) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

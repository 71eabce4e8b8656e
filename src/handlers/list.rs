use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /items handler - List every item
///
/// Returns the whole shopping list as a JSON array in insertion order.
#[utoipa::path(
    get,
    path = routes::ITEMS,
    responses(
        (status = 200, description = "All items, in insertion order", body = [Item])
    ),
    tag = "items"
)]
pub async fn list_handler(State(state): State<AppState>) -> (StatusCode, Json<Vec<Item>>) {
    let items = state.store.list().await;
    tracing::debug!("Listed {} items", items.len());
    (StatusCode::OK, Json(items))
}

#[cfg(test)]
mod tests {
    use crate::test_util::{item, send, test_app};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_endpoint_empty() {
        let (app, _) = test_app(vec![]);

        let (status, body) = send(&app, Method::GET, "/items", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_list_endpoint_with_data() {
        let (app, _) = test_app(vec![item("popsicle", 1.45), item("cheerios", 3.40)]);

        let (status, body) = send(&app, Method::GET, "/items", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {"name": "popsicle", "price": 1.45},
                {"name": "cheerios", "price": 3.40}
            ])
        );
    }

    #[tokio::test]
    async fn test_list_reflects_inserts_in_order() {
        let (app, _) = test_app(vec![]);

        for (name, price) in [("milk", 2.5), ("eggs", 4.0), ("bread", 3.25)] {
            let (status, _) = send(
                &app,
                Method::POST,
                "/items",
                Some(json!({"name": name, "price": price})),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (_, body) = send(&app, Method::GET, "/items", None).await;
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["milk", "eggs", "bread"]);
    }
}

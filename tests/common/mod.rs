use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use mealplanner::{router, AppState, Config};
use serde_json::Value;
use tower::ServiceExt;

#[allow(dead_code)]
pub fn create_test_app() -> Router {
    router(AppState {
        config: Config::default(),
    })
}

/// Send a JSON POST request and return the status with the decoded body
#[allow(dead_code)]
pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    (status, body)
}

#[allow(dead_code)]
pub fn sample_document() -> Value {
    serde_json::json!({
        "recipes": [
            {
                "id": 1,
                "name": "Pannenkoeken",
                "category": "Hoofdgerecht",
                "ingredients": [
                    {"name": "Melk", "quantity": "0,5 l", "supermarket": "AH"},
                    {"name": "bloem", "quantity": "250g", "supermarket": "AH"},
                    {"name": "Eieren", "quantity": "3", "supermarket": "Lidl"}
                ]
            },
            {
                "id": 2,
                "name": "Stamppot",
                "category": "Hoofdgerecht",
                "ingredients": [
                    {"name": "Aardappelen", "quantity": "1kg", "supermarket": "Lidl"},
                    {"name": "Melk", "quantity": "1/4 l", "supermarket": "AH"},
                    {"name": "Zout", "quantity": "a pinch", "supermarket": "AH"}
                ]
            }
        ],
        "meal_plan": [
            {"date": "2026-10-20", "recipe_id": 2},
            {"date": "2026-10-19", "recipe_id": 1},
            {"date": "2026-10-21", "recipe_id": 1}
        ]
    })
}

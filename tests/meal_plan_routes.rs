use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::{create_test_app, post_json, sample_document};

#[tokio::test]
async fn test_schedule_lists_days_in_date_order() {
    let (status, body) = post_json(create_test_app(), "/meal_plan", sample_document()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"date": "2026-10-19", "recipe_id": 1, "recipe_name": "Pannenkoeken"},
            {"date": "2026-10-20", "recipe_id": 2, "recipe_name": "Stamppot"},
            {"date": "2026-10-21", "recipe_id": 1, "recipe_name": "Pannenkoeken"}
        ])
    );
}

#[tokio::test]
async fn test_generate_plan_covers_requested_days() {
    let (status, body) = post_json(
        create_test_app(),
        "/generate_plan?days=3&start=2026-11-02",
        sample_document(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let meal_plan = body["meal_plan"].as_array().unwrap();
    let dates: Vec<_> = meal_plan
        .iter()
        .map(|meal| meal["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2026-11-02", "2026-11-03", "2026-11-04"]);

    for meal in meal_plan {
        let id = meal["recipe_id"].as_u64().unwrap();
        assert!(id == 1 || id == 2, "unexpected recipe id {id}");
    }

    assert_eq!(body["recipes"], sample_document()["recipes"]);
}

#[tokio::test]
async fn test_generate_plan_uses_default_days() {
    let (status, body) = post_json(create_test_app(), "/generate_plan", sample_document()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meal_plan"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_generate_plan_without_recipes() {
    let (status, body) = post_json(
        create_test_app(),
        "/generate_plan?days=7",
        json!({"recipes": []}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("no recipes"));
}

#[tokio::test]
async fn test_generate_plan_rejects_too_many_days() {
    let (status, _) = post_json(
        create_test_app(),
        "/generate_plan?days=1000",
        sample_document(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

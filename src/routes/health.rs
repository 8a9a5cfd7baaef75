use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// GET /health - Liveness check
/// Returns 200 OK if the process is alive
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

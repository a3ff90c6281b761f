/*
 * Responsibility
 * - GET /health (liveness)
 * - No input, no state: always 200 {"status":"UP"}
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "UP"})))
}

use axum::{http::StatusCode, response::Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    service: String,
}

// GET /nba-api/health - Fixed status payload, no state behind it
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "ok".to_string(),
        service: "nba-api-alternative".to_string(),
    };

    (StatusCode::OK, Json(response))
}

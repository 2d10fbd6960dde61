use axum::Json;

use crate::models::HealthResponse;

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        build: env!("ACTIVITIES_BUILD_ID").to_string(),
    })
}

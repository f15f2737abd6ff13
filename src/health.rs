use axum::{Json, extract::State};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::app_state::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    vocabulary_size: usize,
}

#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses(
        (status = 200, description = "Health check successful", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let vocabulary_size = state.classifier.vocabulary_size();
    info!("Health check passed");
    Json(HealthResponse {
        status: "OK".to_string(),
        vocabulary_size,
    })
}

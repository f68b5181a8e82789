use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct SetupResponse {
    pub model_version: String,
}

/// The labeling config and project payload are not needed by the pipeline.
pub async fn setup_handler(State(state): State<AppState>) -> impl IntoResponse {
    tracing::info!(model_version = %state.model_version, "Setup requested");
    (
        StatusCode::OK,
        Json(SetupResponse {
            model_version: state.model_version.clone(),
        }),
    )
}

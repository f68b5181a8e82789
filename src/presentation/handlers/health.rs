use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

pub const MODEL_CLASS: &str = "AudioPrelabelBackend";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_class: String,
}

pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "UP".to_string(),
            model_class: MODEL_CLASS.to_string(),
        }),
    )
}

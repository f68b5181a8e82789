use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;

use crate::presentation::state::AppState;

pub async fn train_handler(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let completions = serde_json::from_slice::<Value>(&body).unwrap_or(Value::Null);
    let status = state.prediction_service.fit(&completions);
    (StatusCode::OK, Json(status))
}

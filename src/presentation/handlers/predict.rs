use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Prediction, Task};
use crate::presentation::state::AppState;

/// Accepted request bodies: a bare task array, or an object carrying the
/// array under `tasks` alongside other parameters.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PredictRequest {
    Batch(Vec<Value>),
    Envelope { tasks: Vec<Value> },
}

impl PredictRequest {
    pub fn parse(body: &[u8]) -> Result<Self, String> {
        serde_json::from_slice(body).map_err(|_| {
            "Request body must be a task array or an object with a `tasks` array".to_string()
        })
    }

    /// Tasks that do not deserialize are dropped, like tasks without audio.
    pub fn into_tasks(self) -> Vec<Task> {
        let raw = match self {
            PredictRequest::Batch(tasks) => tasks,
            PredictRequest::Envelope { tasks } => tasks,
        };

        raw.into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value::<Task>(value) {
                Ok(task) => Some(task),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping malformed task");
                    None
                }
            })
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub results: Vec<Prediction>,
    pub model_version: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, body), fields(body_bytes = body.len()))]
pub async fn predict_handler(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let request = match PredictRequest::parse(&body) {
        Ok(request) => request,
        Err(error) => {
            tracing::warn!(error = %error, "Rejecting predict request");
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response();
        }
    };

    let tasks = request.into_tasks();
    tracing::info!(tasks = tasks.len(), "Predict request received");

    let results = state.prediction_service.predict(&tasks).await;

    (
        StatusCode::OK,
        Json(PredictResponse {
            results,
            model_version: state.model_version.clone(),
        }),
    )
        .into_response()
}

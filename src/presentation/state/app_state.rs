use std::sync::Arc;

use crate::application::services::PredictionService;

#[derive(Clone)]
pub struct AppState {
    pub prediction_service: Arc<PredictionService>,
    pub model_version: String,
}

impl AppState {
    pub fn new(prediction_service: Arc<PredictionService>, model_version: String) -> Self {
        Self {
            prediction_service,
            model_version,
        }
    }
}

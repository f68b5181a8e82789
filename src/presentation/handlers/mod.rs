mod health;
mod predict;
mod setup;
mod train;

pub use health::{HealthResponse, MODEL_CLASS, health_handler};
pub use predict::{ErrorResponse, PredictRequest, PredictResponse, predict_handler};
pub use setup::{SetupResponse, setup_handler};
pub use train::train_handler;

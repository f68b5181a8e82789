use std::path::Path;

/// BPM estimation backend.
///
/// Implementations are blocking; callers run them off the async executor.
pub trait TempoAnalyzer: Send + Sync {
    /// Whether this analyzer can produce estimates in the current build.
    fn is_available(&self) -> bool;

    fn estimate_bpm(&self, path: &Path) -> Result<f64, TempoError>;

    /// Name used in logs.
    fn name(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum TempoError {
    #[error("tempo analysis unavailable")]
    Unavailable,
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("insufficient signal: {0}")]
    InsufficientSignal(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

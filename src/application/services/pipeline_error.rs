use crate::application::ports::ResolutionError;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("audio resolution: {0}")]
    Resolution(#[from] ResolutionError),
    #[error("{stage} stage failed: {message}")]
    StageFailed {
        stage: &'static str,
        message: String,
    },
}

impl PipelineError {
    pub fn stage(stage: &'static str, err: tokio::task::JoinError) -> Self {
        let message = if err.is_panic() {
            "analysis panicked".to_string()
        } else {
            err.to_string()
        };
        Self::StageFailed { stage, message }
    }
}

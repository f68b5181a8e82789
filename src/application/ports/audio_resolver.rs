use async_trait::async_trait;

use crate::domain::{AudioReference, LocalAudioHandle};

#[async_trait]
pub trait AudioResolver: Send + Sync {
    async fn resolve(&self, reference: &AudioReference)
    -> Result<LocalAudioHandle, ResolutionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    #[error("invalid audio reference: {0}")]
    InvalidReference(String),
    #[error("audio not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("unsupported audio reference: {0}")]
    Unsupported(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

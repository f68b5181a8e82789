use std::path::Path;

use crate::domain::MetadataOutcome;

/// Container tag reader.
///
/// Implementations are blocking; callers run them off the async executor.
pub trait MetadataReader: Send + Sync {
    fn is_available(&self) -> bool;

    fn read(&self, path: &Path) -> Result<MetadataOutcome, MetadataError>;

    fn name(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("metadata extraction unavailable")]
    Unavailable,
    #[error("failed to read tags: {0}")]
    ReadFailed(String),
}

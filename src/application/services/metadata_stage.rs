use std::path::Path;
use std::sync::Arc;

use crate::application::ports::MetadataReader;
use crate::domain::MetadataOutcome;

use super::PipelineError;

pub struct MetadataStage {
    reader: Arc<dyn MetadataReader>,
}

impl MetadataStage {
    pub fn new(reader: Arc<dyn MetadataReader>) -> Self {
        Self { reader }
    }

    /// Read failures degrade to an empty outcome. `Err` only when the
    /// extraction task itself died.
    pub async fn extract(&self, path: &Path) -> Result<MetadataOutcome, PipelineError> {
        if !self.reader.is_available() {
            tracing::info!(
                reader = self.reader.name(),
                "Metadata extraction unavailable, skipping tags"
            );
            return Ok(MetadataOutcome::empty());
        }

        let reader = Arc::clone(&self.reader);
        let path = path.to_path_buf();
        let result = tokio::task::spawn_blocking(move || reader.read(&path))
            .await
            .map_err(|e| PipelineError::stage("metadata", e))?;

        match result {
            Ok(metadata) => {
                tracing::info!(
                    title = ?metadata.title,
                    artist = ?metadata.artist,
                    album = ?metadata.album,
                    year = ?metadata.year,
                    duration_seconds = ?metadata.duration_seconds,
                    "Extracted metadata"
                );
                Ok(metadata)
            }
            Err(e) => {
                tracing::error!(error = %e, "Metadata extraction failed");
                Ok(MetadataOutcome::empty())
            }
        }
    }
}

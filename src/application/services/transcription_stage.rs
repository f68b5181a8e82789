use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{LocalAudioHandle, TranscriptOutcome};

/// Best-effort speech-to-text. Never fails: an absent engine yields the
/// unavailable placeholder, provider errors are embedded in the text.
pub struct TranscriptionStage {
    engine: Option<Arc<dyn TranscriptionEngine>>,
}

impl TranscriptionStage {
    pub fn new(engine: Option<Arc<dyn TranscriptionEngine>>) -> Self {
        Self { engine }
    }

    pub fn unconfigured() -> Self {
        Self { engine: None }
    }

    pub fn is_configured(&self) -> bool {
        self.engine.is_some()
    }

    pub async fn transcribe(&self, handle: &LocalAudioHandle, file_name: &str) -> TranscriptOutcome {
        let Some(engine) = &self.engine else {
            tracing::info!("Transcription engine not configured, skipping transcription");
            return TranscriptOutcome::unconfigured();
        };

        match self.run(engine.as_ref(), handle, file_name).await {
            Ok(text) => {
                tracing::debug!(chars = text.len(), "Transcription succeeded");
                TranscriptOutcome::transcribed(text)
            }
            Err(e) => {
                tracing::error!(error = %e, "Transcription failed");
                TranscriptOutcome::failed(e)
            }
        }
    }

    async fn run(
        &self,
        engine: &dyn TranscriptionEngine,
        handle: &LocalAudioHandle,
        file_name: &str,
    ) -> Result<String, TranscriptionError> {
        let audio = tokio::fs::read(handle.path())
            .await
            .map_err(|e| TranscriptionError::AudioReadFailed(e.to_string()))?;
        engine.transcribe(&audio, file_name).await
    }
}

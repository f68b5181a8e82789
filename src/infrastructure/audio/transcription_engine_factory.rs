use std::sync::Arc;

use crate::application::ports::TranscriptionEngine;
use crate::presentation::config::TranscriptionSettings;

use super::openai_whisper_engine::OpenAiWhisperEngine;

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    /// `None` when no credential is configured; the transcription stage then
    /// runs in its degraded placeholder mode.
    pub fn create(settings: &TranscriptionSettings) -> Option<Arc<dyn TranscriptionEngine>> {
        let api_key = settings
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())?;

        let engine = OpenAiWhisperEngine::new(
            api_key.to_string(),
            settings.base_url.clone(),
            Some(settings.model.clone()),
            Some(settings.language.clone()),
        );

        tracing::info!(
            model = engine.model(),
            language = engine.language(),
            "OpenAI Whisper transcription engine configured"
        );

        Some(Arc::new(engine))
    }
}

use std::path::Path;
use std::sync::Arc;

use crate::application::ports::TempoAnalyzer;
use crate::domain::TempoOutcome;

use super::PipelineError;

pub struct TempoStage {
    analyzer: Arc<dyn TempoAnalyzer>,
}

impl TempoStage {
    pub fn new(analyzer: Arc<dyn TempoAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// `Ok(None)` when the analyzer is unavailable or the estimate failed.
    /// `Err` only when the analysis task itself died.
    pub async fn analyze(&self, path: &Path) -> Result<Option<TempoOutcome>, PipelineError> {
        if !self.analyzer.is_available() {
            tracing::info!(
                analyzer = self.analyzer.name(),
                "Tempo analysis unavailable, skipping BPM detection"
            );
            return Ok(None);
        }

        let analyzer = Arc::clone(&self.analyzer);
        let path = path.to_path_buf();
        let estimate = tokio::task::spawn_blocking(move || analyzer.estimate_bpm(&path))
            .await
            .map_err(|e| PipelineError::stage("tempo", e))?;

        match estimate {
            Ok(raw_bpm) => {
                let outcome = TempoOutcome::from_bpm(raw_bpm);
                match &outcome {
                    Some(tempo) => tracing::info!(
                        bpm = tempo.bpm,
                        category = %tempo.category,
                        "Detected tempo"
                    ),
                    None => tracing::warn!(raw_bpm, "Discarding unusable tempo estimate"),
                }
                Ok(outcome)
            }
            Err(e) => {
                tracing::error!(error = %e, "BPM detection failed");
                Ok(None)
            }
        }
    }
}

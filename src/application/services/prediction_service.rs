use std::sync::Arc;

use serde::Serialize;
use tracing::Instrument;

use crate::application::ports::AudioResolver;
use crate::domain::{AudioReference, Prediction, Task};

use super::{MetadataStage, PipelineError, ResultAssembler, TempoStage, TranscriptionStage};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FitStatus {
    pub status: String,
}

impl FitStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Runs the per-task pipeline over a batch. Tasks are processed one at a
/// time in input order; a failing task is logged and dropped from the output.
pub struct PredictionService {
    resolver: Arc<dyn AudioResolver>,
    transcription: TranscriptionStage,
    tempo: TempoStage,
    metadata: MetadataStage,
    assembler: ResultAssembler,
}

impl PredictionService {
    pub fn new(
        resolver: Arc<dyn AudioResolver>,
        transcription: TranscriptionStage,
        tempo: TempoStage,
        metadata: MetadataStage,
    ) -> Self {
        Self {
            resolver,
            transcription,
            tempo,
            metadata,
            assembler: ResultAssembler,
        }
    }

    pub async fn predict(&self, tasks: &[Task]) -> Vec<Prediction> {
        let mut predictions = Vec::with_capacity(tasks.len());

        for (index, task) in tasks.iter().enumerate() {
            let span = tracing::info_span!("predict_task", index, task_id = ?task.id);

            let Some(reference) = task.audio_reference() else {
                span.in_scope(|| tracing::warn!("No audio reference found in task, skipping"));
                continue;
            };

            match self.process(&reference).instrument(span.clone()).await {
                Ok(prediction) => {
                    span.in_scope(|| tracing::info!("Prediction created"));
                    predictions.push(prediction);
                }
                Err(e) => {
                    span.in_scope(|| tracing::error!(error = %e, "Error processing task"));
                }
            }
        }

        tracing::info!(
            tasks = tasks.len(),
            predictions = predictions.len(),
            "Batch prediction finished"
        );

        predictions
    }

    /// Always succeeds; no training takes place.
    pub fn fit(&self, _completions: &serde_json::Value) -> FitStatus {
        tracing::info!("Fit requested; training is not supported, reporting success");
        FitStatus::ok()
    }

    async fn process(&self, reference: &AudioReference) -> Result<Prediction, PipelineError> {
        tracing::debug!(kind = reference.kind().label(), "Resolving audio reference");

        let handle = self.resolver.resolve(reference).await?;
        tracing::info!(
            path = %handle.path().display(),
            temporary = handle.is_temporary(),
            "Audio available locally"
        );

        let transcript = self
            .transcription
            .transcribe(&handle, &reference.file_name())
            .await;
        let tempo = self.tempo.analyze(handle.path()).await?;
        let metadata = self.metadata.extract(handle.path()).await?;

        drop(handle);

        Ok(self
            .assembler
            .assemble(&transcript, tempo.as_ref(), &metadata))
    }
}

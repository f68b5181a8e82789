mod metadata_stage;
mod pipeline_error;
mod prediction_service;
mod result_assembler;
mod tempo_stage;
mod transcription_stage;

pub use metadata_stage::MetadataStage;
pub use pipeline_error::PipelineError;
pub use prediction_service::{FitStatus, PredictionService};
pub use result_assembler::{
    BPM_FIELD, DURATION_FIELD, ResultAssembler, TEMPO_CATEGORY_FIELD, TRANSCRIPTION_FIELD,
};
pub use tempo_stage::TempoStage;
pub use transcription_stage::TranscriptionStage;

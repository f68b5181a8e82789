mod audio_reference;
mod local_audio;
mod metadata;
mod prediction;
mod task;
mod tempo;
mod transcript;

pub use audio_reference::{AudioReference, AudioReferenceKind};
pub use local_audio::LocalAudioHandle;
pub use metadata::MetadataOutcome;
pub use prediction::{
    AUDIO_TARGET, Prediction, ResultItem, ResultKind, ResultValue, format_decimal,
};
pub use task::{AUDIO_FIELD, Task};
pub use tempo::{TempoCategory, TempoOutcome, round2};
pub use transcript::{
    STUB_TRANSCRIPT_CONFIDENCE, TranscriptOutcome, TranscriptStatus, UNAVAILABLE_TRANSCRIPT_TEXT,
};

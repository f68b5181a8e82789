mod audio_resolver;
mod metadata_reader;
mod tempo_analyzer;
mod transcription_engine;

pub use audio_resolver::{AudioResolver, ResolutionError};
pub use metadata_reader::{MetadataError, MetadataReader};
pub use tempo_analyzer::{TempoAnalyzer, TempoError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};

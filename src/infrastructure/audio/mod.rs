#[cfg(feature = "tempo")]
pub mod audio_decoder;
mod noop_tempo_analyzer;
mod openai_whisper_engine;
#[cfg(feature = "tempo")]
mod spectral_flux_tempo_analyzer;
mod tempo_analyzer_factory;
mod transcription_engine_factory;

pub use noop_tempo_analyzer::NoopTempoAnalyzer;
pub use openai_whisper_engine::{
    DEFAULT_LANGUAGE, DEFAULT_OPENAI_BASE_URL, DEFAULT_WHISPER_MODEL, OpenAiWhisperEngine,
};
#[cfg(feature = "tempo")]
pub use spectral_flux_tempo_analyzer::SpectralFluxTempoAnalyzer;
pub use tempo_analyzer_factory::TempoAnalyzerFactory;
pub use transcription_engine_factory::TranscriptionEngineFactory;

mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AnalysisSettings, DEFAULT_MODEL_VERSION, LoggingSettings, ServerSettings, Settings,
    StorageSettings, TranscriptionSettings,
};

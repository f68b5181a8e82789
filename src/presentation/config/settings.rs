use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

pub const DEFAULT_MODEL_VERSION: &str = "0.0.1";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub transcription: TranscriptionSettings,
    pub storage: StorageSettings,
    pub analysis: AnalysisSettings,
    pub logging: LoggingSettings,
    pub model_version: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    pub model: String,
    pub language: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub host_url: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub local_files_root: Option<String>,
    #[serde(default)]
    pub download_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    pub tempo_enabled: bool,
    pub metadata_enabled: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            tempo_enabled: true,
            metadata_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.<env>.toml`, `APP_*` variables
    /// (`__` separates sections) and the well-known service variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 9090)?
            .set_default("transcription.model", "whisper-1")?
            .set_default("transcription.language", "en")?
            .set_default("analysis.tempo_enabled", true)?
            .set_default("analysis.metadata_enabled", true)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .set_default("model_version", DEFAULT_MODEL_VERSION)?
            .add_source(
                File::with_name(&environment.settings_file()).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("transcription.api_key", non_empty_env("OPENAI_API_KEY"))?
            .set_override_option("storage.host_url", non_empty_env("LABEL_STUDIO_URL"))?
            .set_override_option("storage.access_token", non_empty_env("LABEL_STUDIO_API_KEY"))?
            .set_override_option(
                "storage.local_files_root",
                non_empty_env("LOCAL_FILES_DOCUMENT_ROOT"),
            )?
            .build()?
            .try_deserialize()
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

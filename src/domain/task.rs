use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::AudioReference;

pub const AUDIO_FIELD: &str = "audio";

/// A unit of work sent by the annotation tool.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Task {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<i64>,
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl Task {
    pub fn with_audio(id: Option<i64>, audio: impl Into<String>) -> Self {
        let mut data = Map::new();
        data.insert(AUDIO_FIELD.to_string(), Value::String(audio.into()));
        Self { id, data }
    }

    /// Returns `None` when `data.audio` is missing, empty, or not a string.
    pub fn audio_reference(&self) -> Option<AudioReference> {
        match self.data.get(AUDIO_FIELD) {
            Some(Value::String(raw)) if !raw.trim().is_empty() => {
                Some(AudioReference::parse(raw.trim()))
            }
            _ => None,
        }
    }
}

/// Integral numbers and numeric strings become the id; anything else is
/// dropped so the task still runs.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Some(Value::String(text)) => text.trim().parse().ok(),
        _ => None,
    };
    Ok(id)
}

/// Stand-in score reported for a successful transcription.
///
/// The provider returns no confidence signal; this is a fixed stub, not a
/// measurement.
pub const STUB_TRANSCRIPT_CONFIDENCE: f64 = 0.99;

pub const UNAVAILABLE_TRANSCRIPT_TEXT: &str = "<transcription unavailable>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptStatus {
    Transcribed,
    Unconfigured,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptOutcome {
    pub text: String,
    pub status: TranscriptStatus,
}

impl TranscriptOutcome {
    pub fn transcribed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: TranscriptStatus::Transcribed,
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            text: UNAVAILABLE_TRANSCRIPT_TEXT.to_string(),
            status: TranscriptStatus::Unconfigured,
        }
    }

    pub fn failed(error: impl std::fmt::Display) -> Self {
        Self {
            text: format!("[Transcription error: {}]", error),
            status: TranscriptStatus::Failed,
        }
    }

    pub fn score(&self) -> f64 {
        match self.status {
            TranscriptStatus::Transcribed => STUB_TRANSCRIPT_CONFIDENCE,
            TranscriptStatus::Unconfigured | TranscriptStatus::Failed => 0.0,
        }
    }

    pub fn is_stubbed_confidence(&self) -> bool {
        self.status == TranscriptStatus::Transcribed
    }
}

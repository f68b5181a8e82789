use crate::domain::{
    MetadataOutcome, Prediction, ResultItem, TempoOutcome, TranscriptOutcome, format_decimal,
};

pub const TRANSCRIPTION_FIELD: &str = "transcription";
pub const BPM_FIELD: &str = "bpm";
pub const TEMPO_CATEGORY_FIELD: &str = "tempo_category";
pub const DURATION_FIELD: &str = "duration";

/// Builds the annotation result in a fixed order: transcript, bpm, tempo
/// category, then title, artist, album, year, duration. Absent outputs emit
/// nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResultAssembler;

impl ResultAssembler {
    pub fn assemble(
        &self,
        transcript: &TranscriptOutcome,
        tempo: Option<&TempoOutcome>,
        metadata: &MetadataOutcome,
    ) -> Prediction {
        let mut result = vec![ResultItem::text(TRANSCRIPTION_FIELD, transcript.text.clone())];

        if let Some(tempo) = tempo {
            result.push(ResultItem::text(BPM_FIELD, format_decimal(tempo.bpm)));
            result.push(ResultItem::choice(
                TEMPO_CATEGORY_FIELD,
                tempo.category.as_str(),
            ));
        }

        for (field, value) in metadata.text_fields() {
            result.push(ResultItem::text(field, value));
        }

        if let Some(duration) = metadata.duration_seconds {
            result.push(ResultItem::number(DURATION_FIELD, duration));
        }

        Prediction {
            result,
            score: transcript.score(),
        }
    }
}

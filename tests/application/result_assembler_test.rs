use audio_prelabel::application::services::ResultAssembler;
use audio_prelabel::domain::{
    MetadataOutcome, ResultKind, ResultValue, TempoOutcome, TranscriptOutcome,
};

fn full_metadata() -> MetadataOutcome {
    MetadataOutcome {
        title: Some("Song".to_string()),
        artist: Some("Band".to_string()),
        album: Some("Record".to_string()),
        year: Some("2019".to_string()),
        duration_seconds: Some(201.46),
    }
}

#[test]
fn given_only_transcript_when_assembling_then_single_item() {
    let transcript = TranscriptOutcome::unconfigured();

    let prediction = ResultAssembler.assemble(&transcript, None, &MetadataOutcome::empty());

    assert_eq!(prediction.result.len(), 1);
    assert_eq!(prediction.result[0].from_name, "transcription");
    assert_eq!(prediction.score, 0.0);
}

#[test]
fn given_all_outputs_when_assembling_then_items_follow_fixed_order() {
    let transcript = TranscriptOutcome::transcribed("hello");
    let tempo = TempoOutcome::from_bpm(128.0).unwrap();

    let prediction = ResultAssembler.assemble(&transcript, Some(&tempo), &full_metadata());

    let names: Vec<&str> = prediction
        .result
        .iter()
        .map(|item| item.from_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "transcription",
            "bpm",
            "tempo_category",
            "title",
            "artist",
            "album",
            "year",
            "duration"
        ]
    );
}

#[test]
fn given_all_outputs_when_assembling_then_only_duration_is_numeric() {
    let transcript = TranscriptOutcome::transcribed("hello");
    let tempo = TempoOutcome::from_bpm(100.0).unwrap();

    let prediction = ResultAssembler.assemble(&transcript, Some(&tempo), &full_metadata());

    for item in &prediction.result {
        let expected = match item.from_name.as_str() {
            "duration" => ResultKind::Number,
            "tempo_category" => ResultKind::Choices,
            _ => ResultKind::Textarea,
        };
        assert_eq!(item.kind, expected, "{}", item.from_name);
    }
    assert_eq!(
        prediction.find("duration").unwrap().value,
        ResultValue::Number { number: 201.46 }
    );
}

#[test]
fn given_tempo_when_assembling_then_bpm_is_text_and_category_is_choice() {
    let transcript = TranscriptOutcome::transcribed("hello");
    let tempo = TempoOutcome::from_bpm(95.0).unwrap();

    let prediction = ResultAssembler.assemble(&transcript, Some(&tempo), &MetadataOutcome::empty());

    assert_eq!(
        prediction.find("bpm").unwrap().value,
        ResultValue::Text {
            text: vec!["95.0".to_string()]
        }
    );
    assert_eq!(
        prediction.find("tempo_category").unwrap().value,
        ResultValue::Choices {
            choices: vec!["medium".to_string()]
        }
    );
}

#[test]
fn given_partial_metadata_when_assembling_then_absent_fields_are_skipped() {
    let transcript = TranscriptOutcome::transcribed("hello");
    let metadata = MetadataOutcome {
        artist: Some("Band".to_string()),
        duration_seconds: Some(12.0),
        ..MetadataOutcome::default()
    };

    let prediction = ResultAssembler.assemble(&transcript, None, &metadata);

    let names: Vec<&str> = prediction
        .result
        .iter()
        .map(|item| item.from_name.as_str())
        .collect();
    assert_eq!(names, vec!["transcription", "artist", "duration"]);
}

#[test]
fn given_tempo_and_metadata_when_assembling_then_score_follows_transcript_only() {
    let tempo = TempoOutcome::from_bpm(140.0).unwrap();

    let failed = ResultAssembler.assemble(
        &TranscriptOutcome::failed("timeout"),
        Some(&tempo),
        &full_metadata(),
    );
    let succeeded = ResultAssembler.assemble(
        &TranscriptOutcome::transcribed("ok"),
        Some(&tempo),
        &full_metadata(),
    );

    assert_eq!(failed.score, 0.0);
    assert_eq!(succeeded.score, 0.99);
}

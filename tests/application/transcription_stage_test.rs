use std::sync::Arc;

use audio_prelabel::application::services::TranscriptionStage;
use audio_prelabel::domain::{LocalAudioHandle, TranscriptStatus, UNAVAILABLE_TRANSCRIPT_TEXT};

use crate::helpers::{
    FailingTranscriptionEngine, FixedTranscriptionEngine, RecordingTranscriptionEngine,
};

fn audio_handle(contents: &[u8]) -> (tempfile::TempDir, LocalAudioHandle) {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("clip.mp3");
    std::fs::write(&path, contents).unwrap();
    (dir, LocalAudioHandle::borrowed(path))
}

#[tokio::test]
async fn given_no_engine_when_transcribing_then_returns_placeholder_with_zero_score() {
    let (_dir, handle) = audio_handle(b"bytes");
    let stage = TranscriptionStage::unconfigured();

    let outcome = stage.transcribe(&handle, "audio.mp3").await;

    assert!(!stage.is_configured());
    assert_eq!(outcome.text, UNAVAILABLE_TRANSCRIPT_TEXT);
    assert_eq!(outcome.status, TranscriptStatus::Unconfigured);
    assert_eq!(outcome.score(), 0.0);
}

#[tokio::test]
async fn given_engine_when_transcribing_then_returns_text_with_stub_confidence() {
    let (_dir, handle) = audio_handle(b"bytes");
    let stage = TranscriptionStage::new(Some(Arc::new(FixedTranscriptionEngine("hello world"))));

    let outcome = stage.transcribe(&handle, "audio.mp3").await;

    assert_eq!(outcome.text, "hello world");
    assert!(outcome.is_stubbed_confidence());
    assert_eq!(outcome.score(), 0.99);
}

#[tokio::test]
async fn given_engine_error_when_transcribing_then_embeds_error_and_zero_score() {
    let (_dir, handle) = audio_handle(b"bytes");
    let stage = TranscriptionStage::new(Some(Arc::new(FailingTranscriptionEngine)));

    let outcome = stage.transcribe(&handle, "audio.mp3").await;

    assert_eq!(outcome.status, TranscriptStatus::Failed);
    assert_eq!(
        outcome.text,
        "[Transcription error: api request failed: boom]"
    );
    assert_eq!(outcome.score(), 0.0);
}

#[tokio::test]
async fn given_vanished_file_when_transcribing_then_reports_read_failure() {
    let dir = tempfile::TempDir::new().unwrap();
    let handle = LocalAudioHandle::borrowed(dir.path().join("gone.wav"));
    let stage = TranscriptionStage::new(Some(Arc::new(FixedTranscriptionEngine("unused"))));

    let outcome = stage.transcribe(&handle, "audio.wav").await;

    assert_eq!(outcome.status, TranscriptStatus::Failed);
    assert!(outcome.text.starts_with("[Transcription error: audio read failed"));
}

#[tokio::test]
async fn given_engine_when_transcribing_then_sends_file_bytes_and_name() {
    let (_dir, handle) = audio_handle(b"ID3-bytes");
    let engine = Arc::new(RecordingTranscriptionEngine::default());
    let stage = TranscriptionStage::new(Some(engine.clone()));

    stage.transcribe(&handle, "audio.mp3").await;

    let calls = engine.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, b"ID3-bytes".to_vec());
    assert_eq!(calls[0].1, "audio.mp3");
}

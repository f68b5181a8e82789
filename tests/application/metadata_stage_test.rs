use std::path::Path;
use std::sync::Arc;

use audio_prelabel::application::services::{MetadataStage, PipelineError};
use audio_prelabel::domain::MetadataOutcome;
use audio_prelabel::infrastructure::metadata::NoopMetadataReader;

use crate::helpers::{ExplodingMetadataReader, FailingMetadataReader, FixedMetadataReader};

#[tokio::test]
async fn given_unavailable_reader_when_extracting_then_returns_empty_outcome() {
    let stage = MetadataStage::new(Arc::new(NoopMetadataReader));

    let outcome = stage.extract(Path::new("/any.wav")).await.unwrap();

    assert_eq!(outcome, MetadataOutcome::empty());
}

#[tokio::test]
async fn given_read_failure_when_extracting_then_returns_empty_outcome() {
    let stage = MetadataStage::new(Arc::new(FailingMetadataReader));

    let outcome = stage.extract(Path::new("/any.wav")).await.unwrap();

    assert_eq!(outcome, MetadataOutcome::empty());
}

#[tokio::test]
async fn given_partial_tags_when_extracting_then_keeps_present_fields_only() {
    let metadata = MetadataOutcome {
        album: Some("Record".to_string()),
        ..MetadataOutcome::default()
    };
    let stage = MetadataStage::new(Arc::new(FixedMetadataReader(metadata.clone())));

    let outcome = stage.extract(Path::new("/any.wav")).await.unwrap();

    assert_eq!(outcome, metadata);
    assert!(outcome.title.is_none());
}

#[tokio::test]
async fn given_reader_panics_when_extracting_then_returns_stage_failure() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("a.wav");
    std::fs::write(&path, "explode").unwrap();
    let stage = MetadataStage::new(Arc::new(ExplodingMetadataReader));

    let result = stage.extract(&path).await;

    assert!(matches!(
        result,
        Err(PipelineError::StageFailed {
            stage: "metadata",
            ..
        })
    ));
}

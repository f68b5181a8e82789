#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use audio_prelabel::application::ports::{
    AudioResolver, MetadataError, MetadataReader, ResolutionError, TempoAnalyzer, TempoError,
    TranscriptionEngine, TranscriptionError,
};
use audio_prelabel::application::services::{
    MetadataStage, PredictionService, TempoStage, TranscriptionStage,
};
use audio_prelabel::domain::{AudioReference, LocalAudioHandle, MetadataOutcome};
use audio_prelabel::infrastructure::audio::NoopTempoAnalyzer;
use audio_prelabel::infrastructure::metadata::NoopMetadataReader;

/// Writes the reference string into a fresh temp file so downstream doubles
/// can tell tasks apart. References containing `missing` fail to resolve.
#[derive(Default)]
pub struct FakeResolver {
    pub resolved_paths: Mutex<Vec<PathBuf>>,
}

#[async_trait]
impl AudioResolver for FakeResolver {
    async fn resolve(
        &self,
        reference: &AudioReference,
    ) -> Result<LocalAudioHandle, ResolutionError> {
        if reference.as_str().contains("missing") {
            return Err(ResolutionError::NotFound(reference.to_string()));
        }
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(reference.as_str().as_bytes())?;
        self.resolved_paths
            .lock()
            .unwrap()
            .push(file.path().to_path_buf());
        Ok(LocalAudioHandle::temporary(file))
    }
}

pub struct FixedTranscriptionEngine(pub &'static str);

#[async_trait]
impl TranscriptionEngine for FixedTranscriptionEngine {
    async fn transcribe(
        &self,
        _audio_data: &[u8],
        _file_name: &str,
    ) -> Result<String, TranscriptionError> {
        Ok(self.0.to_string())
    }
}

pub struct FailingTranscriptionEngine;

#[async_trait]
impl TranscriptionEngine for FailingTranscriptionEngine {
    async fn transcribe(
        &self,
        _audio_data: &[u8],
        _file_name: &str,
    ) -> Result<String, TranscriptionError> {
        Err(TranscriptionError::ApiRequestFailed("boom".to_string()))
    }
}

/// Records the upload names it was called with.
#[derive(Default)]
pub struct RecordingTranscriptionEngine {
    pub calls: Mutex<Vec<(Vec<u8>, String)>>,
}

#[async_trait]
impl TranscriptionEngine for RecordingTranscriptionEngine {
    async fn transcribe(
        &self,
        audio_data: &[u8],
        file_name: &str,
    ) -> Result<String, TranscriptionError> {
        self.calls
            .lock()
            .unwrap()
            .push((audio_data.to_vec(), file_name.to_string()));
        Ok("recorded".to_string())
    }
}

pub struct FixedTempoAnalyzer(pub f64);

impl TempoAnalyzer for FixedTempoAnalyzer {
    fn is_available(&self) -> bool {
        true
    }

    fn estimate_bpm(&self, _path: &Path) -> Result<f64, TempoError> {
        Ok(self.0)
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

pub struct FailingTempoAnalyzer;

impl TempoAnalyzer for FailingTempoAnalyzer {
    fn is_available(&self) -> bool {
        true
    }

    fn estimate_bpm(&self, _path: &Path) -> Result<f64, TempoError> {
        Err(TempoError::DecodingFailed("unsupported codec".to_string()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

pub struct FixedMetadataReader(pub MetadataOutcome);

impl MetadataReader for FixedMetadataReader {
    fn is_available(&self) -> bool {
        true
    }

    fn read(&self, _path: &Path) -> Result<MetadataOutcome, MetadataError> {
        Ok(self.0.clone())
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

pub struct FailingMetadataReader;

impl MetadataReader for FailingMetadataReader {
    fn is_available(&self) -> bool {
        true
    }

    fn read(&self, _path: &Path) -> Result<MetadataOutcome, MetadataError> {
        Err(MetadataError::ReadFailed("corrupt header".to_string()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// Panics for files whose contents mention `explode`, reads a title otherwise.
pub struct ExplodingMetadataReader;

impl MetadataReader for ExplodingMetadataReader {
    fn is_available(&self) -> bool {
        true
    }

    fn read(&self, path: &Path) -> Result<MetadataOutcome, MetadataError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| MetadataError::ReadFailed(e.to_string()))?;
        if contents.contains("explode") {
            panic!("tag parser crashed");
        }
        Ok(MetadataOutcome {
            title: Some("Song".to_string()),
            ..MetadataOutcome::default()
        })
    }

    fn name(&self) -> &'static str {
        "exploding"
    }
}

pub fn build_service(
    resolver: Arc<dyn AudioResolver>,
    engine: Option<Arc<dyn TranscriptionEngine>>,
    tempo: Arc<dyn TempoAnalyzer>,
    metadata: Arc<dyn MetadataReader>,
) -> PredictionService {
    PredictionService::new(
        resolver,
        TranscriptionStage::new(engine),
        TempoStage::new(tempo),
        MetadataStage::new(metadata),
    )
}

/// No credential, no analysis capabilities.
pub fn degraded_service() -> PredictionService {
    build_service(
        Arc::new(FakeResolver::default()),
        None,
        Arc::new(NoopTempoAnalyzer),
        Arc::new(NoopMetadataReader),
    )
}

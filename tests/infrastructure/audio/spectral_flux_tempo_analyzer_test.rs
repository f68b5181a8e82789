use std::path::Path;

use audio_prelabel::application::ports::{TempoAnalyzer, TempoError};
use audio_prelabel::infrastructure::audio::SpectralFluxTempoAnalyzer;

// 512-sample hops at this rate give 40 onset frames per second, so common
// tempos land on whole-frame lags.
const SAMPLE_RATE: u32 = 20_480;

fn click_track(bpm: f64, seconds: f64) -> Vec<f32> {
    let total = (SAMPLE_RATE as f64 * seconds) as usize;
    let period = (SAMPLE_RATE as f64 * 60.0 / bpm) as usize;
    let click_len = 400;
    let mut samples = vec![0.0f32; total];

    for start in (0..total).step_by(period) {
        for i in 0..click_len.min(total - start) {
            let t = i as f32 / SAMPLE_RATE as f32;
            let decay = (-(i as f32) / 80.0).exp();
            samples[start + i] = 0.8 * decay * (2.0 * std::f32::consts::PI * 1_500.0 * t).sin();
        }
    }
    samples
}

fn write_wav(path: &Path, samples: &[f32]) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for sample in samples {
        writer
            .write_sample((sample * i16::MAX as f32) as i16)
            .unwrap();
    }
    writer.finalize().unwrap();
}

#[test]
fn given_120_bpm_click_track_when_estimating_then_detects_120() {
    let analyzer = SpectralFluxTempoAnalyzer::new();

    let bpm = analyzer
        .estimate_from_samples(&click_track(120.0, 12.0), SAMPLE_RATE)
        .unwrap();

    assert!((bpm - 120.0).abs() < 2.0, "estimated {bpm}");
}

#[test]
fn given_100_bpm_wav_file_when_estimating_then_detects_100() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("clicks.wav");
    write_wav(&path, &click_track(100.0, 12.0));
    let analyzer = SpectralFluxTempoAnalyzer::new();

    let bpm = analyzer.estimate_bpm(&path).unwrap();

    assert!((bpm - 100.0).abs() < 2.0, "estimated {bpm}");
}

#[test]
fn given_silence_when_estimating_then_insufficient_signal() {
    let analyzer = SpectralFluxTempoAnalyzer::new();

    let result = analyzer.estimate_from_samples(&vec![0.0; SAMPLE_RATE as usize * 5], SAMPLE_RATE);

    assert!(matches!(result, Err(TempoError::InsufficientSignal(_))));
}

#[test]
fn given_very_short_clip_when_estimating_then_insufficient_signal() {
    let analyzer = SpectralFluxTempoAnalyzer::new();

    let result = analyzer.estimate_from_samples(&click_track(120.0, 0.2), SAMPLE_RATE);

    assert!(matches!(result, Err(TempoError::InsufficientSignal(_))));
}

#[test]
fn given_non_audio_file_when_estimating_then_decoding_failed() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("notes.wav");
    std::fs::write(&path, b"this is not a wave file at all").unwrap();
    let analyzer = SpectralFluxTempoAnalyzer::new();

    let result = analyzer.estimate_bpm(&path);

    assert!(matches!(result, Err(TempoError::DecodingFailed(_))));
}

#[test]
fn given_missing_file_when_estimating_then_io_error() {
    let analyzer = SpectralFluxTempoAnalyzer::new();

    let result = analyzer.estimate_bpm(Path::new("/definitely/not/here.wav"));

    assert!(matches!(result, Err(TempoError::Io(_))));
    assert!(analyzer.is_available());
}

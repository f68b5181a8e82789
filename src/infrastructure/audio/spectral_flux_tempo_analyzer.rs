use std::path::Path;

use rustfft::FftPlanner;
use rustfft::num_complex::Complex;

use crate::application::ports::{TempoAnalyzer, TempoError};

use super::audio_decoder::decode_file_to_mono;

const FRAME_SIZE: usize = 2048;
const HOP_SIZE: usize = 512;
const MIN_BPM: f64 = 30.0;
const MAX_BPM: f64 = 300.0;
const PRIOR_CENTER_BPM: f64 = 120.0;
/// Width of the tempo prior, in octaves.
const PRIOR_STD_OCTAVES: f64 = 1.0;
const LOG_COMPRESSION: f32 = 100.0;
const MIN_ENVELOPE_ENERGY: f64 = 1e-9;

/// Tempo estimator: spectral-flux onset envelope, autocorrelation over the
/// 30-300 BPM lag range, weighted by a log-normal prior around 120 BPM.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpectralFluxTempoAnalyzer;

impl SpectralFluxTempoAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn estimate_from_samples(&self, samples: &[f32], sample_rate: u32) -> Result<f64, TempoError> {
        if sample_rate == 0 {
            return Err(TempoError::DecodingFailed("zero sample rate".to_string()));
        }

        let envelope = onset_envelope(samples)?;
        let frame_rate = sample_rate as f64 / HOP_SIZE as f64;

        let min_lag = ((60.0 * frame_rate / MAX_BPM).floor() as usize).max(1);
        let max_lag = ((60.0 * frame_rate / MIN_BPM).ceil() as usize).min(envelope.len() - 1);
        if min_lag + 2 > max_lag {
            return Err(TempoError::InsufficientSignal(format!(
                "{} onset frames cover too little time",
                envelope.len()
            )));
        }

        let acf: Vec<f64> = (0..=max_lag + 1)
            .map(|lag| autocorrelation(&envelope, lag))
            .collect();

        let (best_lag, best_score) = (min_lag..=max_lag)
            .map(|lag| {
                let bpm = 60.0 * frame_rate / lag as f64;
                (lag, acf[lag] * tempo_prior(bpm))
            })
            .fold((0, f64::NEG_INFINITY), |best, candidate| {
                if candidate.1 > best.1 { candidate } else { best }
            });

        if best_lag == 0 || best_score <= 0.0 {
            return Err(TempoError::InsufficientSignal(
                "no periodic onset structure".to_string(),
            ));
        }

        let refined_lag = refine_peak(&acf, best_lag);
        let bpm = 60.0 * frame_rate / refined_lag;

        tracing::debug!(
            lag = best_lag,
            refined_lag,
            frame_rate,
            bpm,
            "Tempo estimated from onset autocorrelation"
        );

        Ok(bpm)
    }
}

impl TempoAnalyzer for SpectralFluxTempoAnalyzer {
    fn is_available(&self) -> bool {
        true
    }

    fn estimate_bpm(&self, path: &Path) -> Result<f64, TempoError> {
        let audio = decode_file_to_mono(path)?;
        self.estimate_from_samples(&audio.samples, audio.sample_rate)
    }

    fn name(&self) -> &'static str {
        "spectral_flux"
    }
}

/// Mean-removed, half-wave rectified log-magnitude spectral flux.
fn onset_envelope(samples: &[f32]) -> Result<Vec<f64>, TempoError> {
    if samples.len() < FRAME_SIZE * 4 {
        return Err(TempoError::InsufficientSignal(format!(
            "{} samples is too short for tempo analysis",
            samples.len()
        )));
    }

    let window = hann_window(FRAME_SIZE);
    let fft = FftPlanner::<f32>::new().plan_fft_forward(FRAME_SIZE);
    let bins = FRAME_SIZE / 2 + 1;
    let frame_count = 1 + (samples.len() - FRAME_SIZE) / HOP_SIZE;

    let mut buffer = vec![Complex::new(0.0f32, 0.0); FRAME_SIZE];
    let mut previous = vec![0.0f32; bins];
    let mut current = vec![0.0f32; bins];
    let mut envelope = Vec::with_capacity(frame_count);

    for frame in 0..frame_count {
        let start = frame * HOP_SIZE;
        for (i, slot) in buffer.iter_mut().enumerate() {
            *slot = Complex::new(samples[start + i] * window[i], 0.0);
        }
        fft.process(&mut buffer);

        for (bin, magnitude) in current.iter_mut().enumerate() {
            *magnitude = (1.0 + LOG_COMPRESSION * buffer[bin].norm()).ln();
        }

        let flux: f32 = if frame == 0 {
            0.0
        } else {
            current
                .iter()
                .zip(previous.iter())
                .map(|(c, p)| (c - p).max(0.0))
                .sum()
        };
        envelope.push(flux as f64);
        std::mem::swap(&mut previous, &mut current);
    }

    let mean = envelope.iter().sum::<f64>() / envelope.len() as f64;
    let energy: f64 = envelope.iter().map(|v| (v - mean).powi(2)).sum();
    if energy < MIN_ENVELOPE_ENERGY {
        return Err(TempoError::InsufficientSignal(
            "no onsets detected".to_string(),
        ));
    }

    Ok(envelope.into_iter().map(|v| v - mean).collect())
}

fn hann_window(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let phase = 2.0 * std::f32::consts::PI * i as f32 / size as f32;
            0.5 - 0.5 * phase.cos()
        })
        .collect()
}

fn autocorrelation(envelope: &[f64], lag: usize) -> f64 {
    if lag >= envelope.len() {
        return 0.0;
    }
    envelope
        .iter()
        .zip(envelope[lag..].iter())
        .map(|(a, b)| a * b)
        .sum()
}

fn tempo_prior(bpm: f64) -> f64 {
    let octaves = (bpm / PRIOR_CENTER_BPM).log2() / PRIOR_STD_OCTAVES;
    (-0.5 * octaves * octaves).exp()
}

/// Parabolic interpolation of the autocorrelation peak.
fn refine_peak(acf: &[f64], lag: usize) -> f64 {
    if lag == 0 || lag + 1 >= acf.len() {
        return lag as f64;
    }
    let (left, center, right) = (acf[lag - 1], acf[lag], acf[lag + 1]);
    let denominator = left - 2.0 * center + right;
    if denominator.abs() < f64::EPSILON {
        return lag as f64;
    }
    let offset = 0.5 * (left - right) / denominator;
    if offset.abs() > 0.5 {
        return lag as f64;
    }
    lag as f64 + offset
}


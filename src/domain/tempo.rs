use std::fmt;
use std::str::FromStr;

const SLOW_UPPER_BPM: f64 = 90.0;
const MEDIUM_UPPER_BPM: f64 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TempoCategory {
    Slow,
    Medium,
    Fast,
}

impl TempoCategory {
    /// `[0, 90)` slow, `[90, 120)` medium, `[120, inf)` fast.
    pub fn from_bpm(bpm: f64) -> Self {
        if bpm < SLOW_UPPER_BPM {
            TempoCategory::Slow
        } else if bpm < MEDIUM_UPPER_BPM {
            TempoCategory::Medium
        } else {
            TempoCategory::Fast
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TempoCategory::Slow => "slow",
            TempoCategory::Medium => "medium",
            TempoCategory::Fast => "fast",
        }
    }
}

impl FromStr for TempoCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slow" => Ok(TempoCategory::Slow),
            "medium" => Ok(TempoCategory::Medium),
            "fast" => Ok(TempoCategory::Fast),
            other => Err(format!("Invalid tempo category: {}", other)),
        }
    }
}

impl fmt::Display for TempoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempoOutcome {
    pub bpm: f64,
    pub category: TempoCategory,
}

impl TempoOutcome {
    /// Rounds to two decimals before categorising. Non-finite or
    /// non-positive estimates yield `None`.
    pub fn from_bpm(raw_bpm: f64) -> Option<Self> {
        if !raw_bpm.is_finite() || raw_bpm <= 0.0 {
            return None;
        }
        let bpm = round2(raw_bpm);
        Some(Self {
            bpm,
            category: TempoCategory::from_bpm(bpm),
        })
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

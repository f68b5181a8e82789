use std::path::Path;

use crate::application::ports::{TempoAnalyzer, TempoError};

/// Stand-in used when tempo analysis is not compiled in or is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTempoAnalyzer;

impl TempoAnalyzer for NoopTempoAnalyzer {
    fn is_available(&self) -> bool {
        false
    }

    fn estimate_bpm(&self, _path: &Path) -> Result<f64, TempoError> {
        Err(TempoError::Unavailable)
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}

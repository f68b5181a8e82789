use std::sync::Arc;

use crate::application::ports::TempoAnalyzer;
use crate::presentation::config::AnalysisSettings;

use super::noop_tempo_analyzer::NoopTempoAnalyzer;

pub struct TempoAnalyzerFactory;

impl TempoAnalyzerFactory {
    pub fn create(settings: &AnalysisSettings) -> Arc<dyn TempoAnalyzer> {
        if !settings.tempo_enabled {
            tracing::info!("Tempo analysis disabled by configuration");
            return Arc::new(NoopTempoAnalyzer);
        }
        Self::linked()
    }

    #[cfg(feature = "tempo")]
    fn linked() -> Arc<dyn TempoAnalyzer> {
        Arc::new(super::spectral_flux_tempo_analyzer::SpectralFluxTempoAnalyzer::new())
    }

    #[cfg(not(feature = "tempo"))]
    fn linked() -> Arc<dyn TempoAnalyzer> {
        tracing::info!("Built without the `tempo` feature; BPM analysis unavailable");
        Arc::new(NoopTempoAnalyzer)
    }
}

use std::sync::Arc;

use crate::application::ports::MetadataReader;
use crate::presentation::config::AnalysisSettings;

use super::noop_metadata_reader::NoopMetadataReader;

pub struct MetadataReaderFactory;

impl MetadataReaderFactory {
    pub fn create(settings: &AnalysisSettings) -> Arc<dyn MetadataReader> {
        if !settings.metadata_enabled {
            tracing::info!("Metadata extraction disabled by configuration");
            return Arc::new(NoopMetadataReader);
        }
        Self::linked()
    }

    #[cfg(feature = "metadata")]
    fn linked() -> Arc<dyn MetadataReader> {
        Arc::new(super::lofty_metadata_reader::LoftyMetadataReader::new())
    }

    #[cfg(not(feature = "metadata"))]
    fn linked() -> Arc<dyn MetadataReader> {
        tracing::info!("Built without the `metadata` feature; tag extraction unavailable");
        Arc::new(NoopMetadataReader)
    }
}

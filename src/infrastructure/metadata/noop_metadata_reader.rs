use std::path::Path;

use crate::application::ports::{MetadataError, MetadataReader};
use crate::domain::MetadataOutcome;

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMetadataReader;

impl MetadataReader for NoopMetadataReader {
    fn is_available(&self) -> bool {
        false
    }

    fn read(&self, _path: &Path) -> Result<MetadataOutcome, MetadataError> {
        Err(MetadataError::Unavailable)
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}

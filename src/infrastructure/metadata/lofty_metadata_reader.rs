use std::path::Path;

use lofty::file::TaggedFileExt;
use lofty::prelude::*;
use lofty::probe::Probe;
use lofty::tag::Tag;

use crate::application::ports::{MetadataError, MetadataReader};
use crate::domain::MetadataOutcome;

/// Reads container tags and stream duration with lofty.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyMetadataReader;

impl LoftyMetadataReader {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataReader for LoftyMetadataReader {
    fn is_available(&self) -> bool {
        true
    }

    fn read(&self, path: &Path) -> Result<MetadataOutcome, MetadataError> {
        let tagged_file = Probe::open(path)
            .map_err(|e| MetadataError::ReadFailed(e.to_string()))?
            .read()
            .map_err(|e| MetadataError::ReadFailed(e.to_string()))?;

        let duration = tagged_file.properties().duration().as_secs_f64();

        let outcome = match tagged_file.primary_tag().or_else(|| tagged_file.first_tag()) {
            Some(tag) => MetadataOutcome {
                title: first_value(tag, &ItemKey::TrackTitle),
                artist: first_value(tag, &ItemKey::TrackArtist),
                album: first_value(tag, &ItemKey::AlbumTitle),
                year: release_year(tag),
                duration_seconds: None,
            },
            None => MetadataOutcome::empty(),
        }
        .with_duration(Some(duration));

        tracing::debug!(
            file = %path.display(),
            file_type = ?tagged_file.file_type(),
            tags = tagged_file.tags().len(),
            "Read audio tags"
        );

        Ok(outcome)
    }

    fn name(&self) -> &'static str {
        "lofty"
    }
}

/// First non-blank value of a possibly multi-valued field.
fn first_value(tag: &Tag, key: &ItemKey) -> Option<String> {
    tag.get_strings(key)
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

fn release_year(tag: &Tag) -> Option<String> {
    first_value(tag, &ItemKey::RecordingDate)
        .or_else(|| first_value(tag, &ItemKey::Year))
        .or_else(|| tag.year().map(|year| year.to_string()))
}

use super::tempo::round2;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataOutcome {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<String>,
    pub duration_seconds: Option<f64>,
}

impl MetadataOutcome {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_duration(mut self, seconds: Option<f64>) -> Self {
        self.duration_seconds = seconds
            .filter(|s| s.is_finite() && *s >= 0.0)
            .map(round2);
        self
    }

    /// Text fields in emission order; absent values are skipped.
    pub fn text_fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("title", self.title.as_deref()),
            ("artist", self.artist.as_deref()),
            ("album", self.album.as_deref()),
            ("year", self.year.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}

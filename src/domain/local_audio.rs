use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Local file backing one task's audio for the duration of its pipeline run.
///
/// Downloaded audio lives in a temporary file removed when the handle drops.
/// Files that already existed on disk are borrowed and left untouched.
#[derive(Debug)]
pub enum LocalAudioHandle {
    Temporary(NamedTempFile),
    Borrowed(PathBuf),
}

impl LocalAudioHandle {
    pub fn temporary(file: NamedTempFile) -> Self {
        Self::Temporary(file)
    }

    pub fn borrowed(path: impl Into<PathBuf>) -> Self {
        Self::Borrowed(path.into())
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Temporary(file) => file.path(),
            Self::Borrowed(path) => path.as_path(),
        }
    }

    pub fn is_temporary(&self) -> bool {
        matches!(self, Self::Temporary(_))
    }
}

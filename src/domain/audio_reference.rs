use std::fmt;
use std::path::PathBuf;

use url::Url;

const STORAGE_PREFIX: &str = "data/";
const LOCAL_FILES_PREFIX: &str = "data/local-files/";
const LOCAL_FILES_PARAM: &str = "d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioReferenceKind {
    /// `http(s)://` URL.
    Remote(Url),
    /// Path served by the annotation tool host, e.g. `/data/upload/3/a.wav`
    /// or `data/upload/3/a.wav`.
    Storage,
    /// `/data/local-files/?d=<relative>`, served from the local document root.
    LocalFiles { relative: String },
    /// `file://` URL or plain filesystem path.
    Local(PathBuf),
}

impl AudioReferenceKind {
    pub fn label(&self) -> &'static str {
        match self {
            AudioReferenceKind::Remote(_) => "remote",
            AudioReferenceKind::Storage => "storage",
            AudioReferenceKind::LocalFiles { .. } => "local_files",
            AudioReferenceKind::Local(_) => "local",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioReference {
    raw: String,
    kind: AudioReferenceKind,
}

impl AudioReference {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let kind = classify(&raw);
        Self { raw, kind }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> &AudioReferenceKind {
        &self.kind
    }

    /// Extension of the last path segment, ignoring query and fragment.
    pub fn extension(&self) -> Option<&str> {
        let path = match &self.kind {
            AudioReferenceKind::LocalFiles { relative } => relative.as_str(),
            _ => self.raw.as_str(),
        };
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let file_name = path.rsplit(['/', '\\']).next()?;
        let (stem, ext) = file_name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext)
    }

    /// Upload file name; providers sniff the container format from it.
    pub fn file_name(&self) -> String {
        match self.extension() {
            Some(ext) => format!("audio.{}", ext.to_ascii_lowercase()),
            None => "audio.wav".to_string(),
        }
    }
}

fn classify(raw: &str) -> AudioReferenceKind {
    if let Ok(url) = Url::parse(raw) {
        match url.scheme() {
            "http" | "https" => return AudioReferenceKind::Remote(url),
            "file" => {
                if let Ok(path) = url.to_file_path() {
                    return AudioReferenceKind::Local(path);
                }
            }
            _ => {}
        }
    }

    // The tool sends storage paths with or without the leading slash.
    let host_path = raw.strip_prefix('/').unwrap_or(raw);

    if host_path.starts_with(LOCAL_FILES_PREFIX) {
        if let Some(relative) = local_files_param(host_path) {
            return AudioReferenceKind::LocalFiles { relative };
        }
    }

    if host_path.starts_with(STORAGE_PREFIX) {
        return AudioReferenceKind::Storage;
    }

    AudioReferenceKind::Local(PathBuf::from(raw))
}

fn local_files_param(host_path: &str) -> Option<String> {
    let base = Url::parse("http://localhost").ok()?;
    let url = base.join(&format!("/{}", host_path)).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == LOCAL_FILES_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

impl fmt::Display for AudioReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::StatusCode;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::application::ports::{AudioResolver, ResolutionError};
use crate::domain::{AudioReference, AudioReferenceKind, LocalAudioHandle};
use crate::infrastructure::observability::sanitize_reference;
use crate::presentation::config::StorageSettings;

const TEMP_PREFIX: &str = "audio-prelabel-";

/// Resolves remote URLs, annotation-tool storage paths, local-storage
/// references and plain filesystem paths to a local file.
pub struct HttpAudioResolver {
    client: reqwest::Client,
    host_url: Option<Url>,
    access_token: Option<String>,
    local_files_root: Option<PathBuf>,
    download_dir: Option<PathBuf>,
}

impl HttpAudioResolver {
    pub fn new(settings: &StorageSettings) -> Result<Self, ResolutionError> {
        let host_url = settings
            .host_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| {
                Url::parse(url).map_err(|e| {
                    ResolutionError::InvalidReference(format!("host url {}: {}", url, e))
                })
            })
            .transpose()?;

        if let Some(dir) = &settings.download_dir {
            std::fs::create_dir_all(dir)?;
        }

        Ok(Self {
            client: reqwest::Client::new(),
            host_url,
            access_token: settings
                .access_token
                .clone()
                .filter(|token| !token.trim().is_empty()),
            local_files_root: settings.local_files_root.as_ref().map(PathBuf::from),
            download_dir: settings.download_dir.as_ref().map(PathBuf::from),
        })
    }

    async fn download(
        &self,
        url: Url,
        reference: &AudioReference,
        authorize: bool,
    ) -> Result<LocalAudioHandle, ResolutionError> {
        let mut request = self.client.get(url.clone());
        if authorize {
            if let Some(token) = &self.access_token {
                request = request.header(reqwest::header::AUTHORIZATION, format!("Token {}", token));
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| ResolutionError::DownloadFailed(format!("request: {}", e)))?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::NOT_FOUND => {
                return Err(ResolutionError::NotFound(sanitize_reference(url.as_str())));
            }
            status => {
                return Err(ResolutionError::DownloadFailed(format!(
                    "status {} for {}",
                    status,
                    sanitize_reference(url.as_str())
                )));
            }
        }

        let temp = self.create_temp_file(reference)?;
        let mut file = tokio::fs::File::from_std(temp.reopen()?);
        let mut stream = response.bytes_stream();
        let mut total_bytes: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let bytes =
                chunk.map_err(|e| ResolutionError::DownloadFailed(format!("body: {}", e)))?;
            total_bytes += bytes.len() as u64;
            file.write_all(&bytes).await?;
        }
        file.flush().await?;

        tracing::debug!(
            url = %sanitize_reference(url.as_str()),
            bytes = total_bytes,
            path = %temp.path().display(),
            "Audio downloaded"
        );

        Ok(LocalAudioHandle::temporary(temp))
    }

    fn create_temp_file(&self, reference: &AudioReference) -> Result<NamedTempFile, ResolutionError> {
        let suffix = reference
            .extension()
            .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
            .unwrap_or_default();
        let mut builder = tempfile::Builder::new();
        builder.prefix(TEMP_PREFIX).suffix(&suffix);
        let file = match &self.download_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        Ok(file)
    }

    fn storage_url(&self, reference: &AudioReference) -> Result<Url, ResolutionError> {
        let host = self.host_url.as_ref().ok_or_else(|| {
            ResolutionError::Unsupported(format!(
                "{} requires an annotation tool host url",
                reference.as_str()
            ))
        })?;
        let path = format!("/{}", reference.as_str().trim_start_matches('/'));
        host.join(&path)
            .map_err(|e| ResolutionError::InvalidReference(format!("{}: {}", reference, e)))
    }

    fn local_files_path(&self, relative: &str) -> Result<PathBuf, ResolutionError> {
        let relative = contained_relative_path(relative)?;
        let root = self.local_files_root.as_ref().ok_or_else(|| {
            ResolutionError::Unsupported(
                "local-files reference requires a document root".to_string(),
            )
        })?;
        Ok(root.join(relative))
    }
}

/// Only plain components may follow the document root; `..`, roots and
/// drive prefixes are rejected.
fn contained_relative_path(relative: &str) -> Result<PathBuf, ResolutionError> {
    let trimmed = relative.trim_start_matches(['/', '\\']);
    let path = Path::new(trimmed);
    let mut contained = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => contained.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ResolutionError::InvalidReference(format!(
                    "local-files path escapes the document root: {}",
                    relative
                )));
            }
        }
    }
    if contained.as_os_str().is_empty() {
        return Err(ResolutionError::InvalidReference(
            "local-files path is empty".to_string(),
        ));
    }
    Ok(contained)
}

fn existing_file(path: &Path) -> Result<LocalAudioHandle, ResolutionError> {
    if path.is_file() {
        Ok(LocalAudioHandle::borrowed(path))
    } else {
        Err(ResolutionError::NotFound(path.display().to_string()))
    }
}

#[async_trait]
impl AudioResolver for HttpAudioResolver {
    async fn resolve(
        &self,
        reference: &AudioReference,
    ) -> Result<LocalAudioHandle, ResolutionError> {
        match reference.kind() {
            AudioReferenceKind::Remote(url) => self.download(url.clone(), reference, false).await,
            AudioReferenceKind::Storage => {
                let url = self.storage_url(reference)?;
                self.download(url, reference, true).await
            }
            AudioReferenceKind::LocalFiles { relative } => {
                match self.local_files_path(relative) {
                    Ok(path) => existing_file(&path),
                    Err(ResolutionError::Unsupported(_)) if self.host_url.is_some() => {
                        let url = self.storage_url(reference)?;
                        self.download(url, reference, true).await
                    }
                    Err(e) => Err(e),
                }
            }
            AudioReferenceKind::Local(path) => existing_file(path),
        }
    }
}

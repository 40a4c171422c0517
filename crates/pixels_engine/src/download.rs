use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("invalid image url: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("image too large (max {max_bytes} bytes)")]
    TooLarge { max_bytes: u64 },
    #[error("download directory missing or not writable: {0}")]
    TargetDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone)]
pub struct DownloadSettings {
    pub max_bytes: u64,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            max_bytes: 20 * 1024 * 1024,
        }
    }
}

/// Persists a remote image under a caller-chosen file name. Failures stay on
/// this boundary; the result aggregator never sees them.
pub struct ImageDownloader {
    client: reqwest::Client,
    dir: PathBuf,
    settings: DownloadSettings,
}

impl ImageDownloader {
    pub fn new(dir: PathBuf, settings: DownloadSettings) -> Result<Self, DownloadError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| DownloadError::Network(err.to_string()))?;
        Ok(Self {
            client,
            dir,
            settings,
        })
    }

    /// Downloads `url` into `{dir}/{file_name}`, streaming with a size cap
    /// and writing through a temp file so a partial download never lands
    /// under the final name.
    pub async fn download(&self, url: &str, file_name: &str) -> Result<PathBuf, DownloadError> {
        let parsed =
            url::Url::parse(url).map_err(|err| DownloadError::InvalidUrl(err.to_string()))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|err| DownloadError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::HttpStatus(status.as_u16()));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(DownloadError::TooLarge {
                    max_bytes: self.settings.max_bytes,
                });
            }
        }

        ensure_download_dir(&self.dir)?;
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        let mut written: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|err| DownloadError::Network(err.to_string()))?;
            written += chunk.len() as u64;
            if written > self.settings.max_bytes {
                return Err(DownloadError::TooLarge {
                    max_bytes: self.settings.max_bytes,
                });
            }
            tmp.write_all(&chunk)?;
        }
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        let target = self.dir.join(file_name);
        // Re-downloading the same item overwrites the previous copy.
        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target)
            .map_err(|err| DownloadError::Io(err.error))?;
        Ok(target)
    }
}

fn ensure_download_dir(dir: &Path) -> Result<(), DownloadError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|err| DownloadError::TargetDir(err.to_string()))?;
        if !meta.is_dir() {
            return Err(DownloadError::TargetDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|err| DownloadError::TargetDir(err.to_string()))?;
    }
    Ok(())
}

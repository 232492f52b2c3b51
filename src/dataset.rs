//! Dataset location and downloading.
//!
//! When the CSV is not present locally it can be fetched from the project's
//! GitHub repository and stored at the expected path.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::FetchError;

/// Raw URL of the published dataset
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/birdcoreone/NLP-python/main/data/twi_words.csv";

/// Dataset location relative to the working directory
pub const DEFAULT_DATASET_FILE: &str = "data/twi_words.csv";

/// Get the default dataset path: `<cwd>/data/twi_words.csv`
pub fn default_dataset_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(DEFAULT_DATASET_FILE)
}

/// Something that can fetch the bytes of a remote dataset.
pub trait DatasetFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// A fetcher that never reaches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineFetcher;

impl DatasetFetcher for OfflineFetcher {
    fn fetch(&self, _url: &str) -> Result<Vec<u8>, FetchError> {
        Err(FetchError::Disabled)
    }
}

/// Blocking HTTP fetcher
#[cfg(feature = "download")]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    timeout: std::time::Duration,
}

#[cfg(feature = "download")]
impl HttpFetcher {
    pub fn new(timeout_secs: u64) -> Self {
        HttpFetcher {
            timeout: std::time::Duration::from_secs(timeout_secs),
        }
    }
}

#[cfg(feature = "download")]
impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(30)
    }
}

#[cfg(feature = "download")]
impl DatasetFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("twi-nlp")
            .timeout(self.timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let response = client
            .get(url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let bytes = response
            .bytes()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// The fetcher matching the build: HTTP when the `download` feature is on.
pub fn default_fetcher(timeout_secs: u64) -> Box<dyn DatasetFetcher> {
    #[cfg(feature = "download")]
    {
        Box::new(HttpFetcher::new(timeout_secs))
    }
    #[cfg(not(feature = "download"))]
    {
        let _ = timeout_secs;
        Box::new(OfflineFetcher)
    }
}

/// Fetch the dataset from `url` and store it at `path`.
///
/// Parent directories are created as needed. Nothing is written unless the
/// fetch succeeded.
pub fn download_dataset(
    fetcher: &dyn DatasetFetcher,
    url: &str,
    path: &Path,
) -> Result<PathBuf, FetchError> {
    info!(url, path = %path.display(), "downloading dataset");
    let bytes = fetcher.fetch(url)?;

    let io_err = |source: std::io::Error| FetchError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    fs::write(path, &bytes).map_err(io_err)?;

    info!(bytes = bytes.len(), "download completed");
    Ok(path.to_path_buf())
}

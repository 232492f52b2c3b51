//! Runtime configuration for [`TwiNlp`](crate::TwiNlp).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dataset::{default_dataset_path, DEFAULT_DATASET_URL};
use crate::error::{LexiconError, Result};

/// Where the dataset lives and how to obtain it when it is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwiNlpConfig {
    /// Path to the CSV dataset. `None` means `<cwd>/data/twi_words.csv`.
    pub dataset_path: Option<PathBuf>,
    /// Remote location tried when the dataset is missing locally
    pub dataset_url: String,
    /// Whether to try the remote location at all
    pub auto_download: bool,
    /// Timeout for the remote fetch, in seconds
    pub timeout_secs: u64,
}

impl Default for TwiNlpConfig {
    fn default() -> Self {
        TwiNlpConfig {
            dataset_path: None,
            dataset_url: DEFAULT_DATASET_URL.to_string(),
            auto_download: true,
            timeout_secs: 30,
        }
    }
}

impl TwiNlpConfig {
    /// Configuration pointing at a specific dataset file
    pub fn with_dataset(path: impl Into<PathBuf>) -> Self {
        TwiNlpConfig {
            dataset_path: Some(path.into()),
            ..Default::default()
        }
    }

    /// Disable the remote fallback
    pub fn offline(mut self) -> Self {
        self.auto_download = false;
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// The dataset path after applying the default
    pub fn resolved_dataset_path(&self) -> PathBuf {
        self.dataset_path
            .clone()
            .unwrap_or_else(default_dataset_path)
    }
}

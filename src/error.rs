//! Error types for dataset loading and fetching.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or parsing a lexicon dataset.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The dataset file could not be read
    #[error("failed to read dataset '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes could not be decoded with the detected encoding
    #[error("dataset is not valid {encoding} text")]
    Decode { encoding: &'static str },

    /// The CSV itself is malformed
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required header is absent
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A configuration file could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl LexiconError {
    /// Whether the dataset was read but its content is unusable
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            LexiconError::MissingColumn(_) | LexiconError::Csv(_) | LexiconError::Decode { .. }
        )
    }
}

/// Errors raised while fetching a dataset from a remote location.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, TLS, timeout, ...)
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("server returned HTTP {0}")]
    Status(u16),

    /// Writing the fetched dataset to disk failed
    #[error("failed to store dataset at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Remote fetching is switched off
    #[error("remote download is disabled")]
    Disabled,
}

pub type Result<T, E = LexiconError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_errors_are_told_apart_from_io() {
        let missing = LexiconError::MissingColumn("POS");
        let io = LexiconError::Io {
            path: PathBuf::from("twi_words.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };

        assert!(missing.is_schema_error());
        assert!(LexiconError::Decode { encoding: "UTF-16LE" }.is_schema_error());
        assert!(!io.is_schema_error());
        assert!(io.to_string().contains("twi_words.csv"));
    }
}

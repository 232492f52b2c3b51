//! The `TwiNlp` facade.
//!
//! Owns the loaded [`Lexicon`] together with the [`Toolkit`] and answers every
//! query the crate offers.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::TwiNlpConfig;
use crate::dataset::{self, DatasetFetcher, OfflineFetcher};
use crate::error::Result;
use crate::lexicon::{Lexicon, LexiconEntry};
use crate::morphology::{StemLemma, Toolkit};

/// Shown when a Twi word has no translation
pub const TRANSLATION_NOT_FOUND: &str = "Translation not found";
/// Shown when a Twi word has no POS tag
pub const POS_NOT_FOUND: &str = "POS not found";

/// Where the current lexicon came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetStatus {
    /// Nothing has been loaded yet
    Empty,
    /// The lexicon was loaded from `path`
    Loaded { path: PathBuf, rows: usize },
    /// The lexicon was supplied directly with [`TwiNlp::set_lexicon`]
    InMemory { rows: usize },
    /// The dataset was missing and could not be fetched
    Unavailable { path: PathBuf, reason: String },
}

/// Twi translation, POS lookup, search, tokenization and stemming
#[derive(Debug)]
pub struct TwiNlp {
    lexicon: Lexicon,
    status: DatasetStatus,
    toolkit: Toolkit,
}

impl TwiNlp {
    /// An instance with no dataset loaded and the default toolkit
    pub fn empty() -> Self {
        TwiNlp {
            lexicon: Lexicon::new(),
            status: DatasetStatus::Empty,
            toolkit: Toolkit::default(),
        }
    }

    /// Load the configured dataset, downloading it first if it is missing.
    ///
    /// A dataset that is missing and cannot be fetched yields an empty
    /// lexicon, reported through [`TwiNlp::status`]. A dataset that exists but
    /// cannot be read or parsed is an error.
    pub fn new(config: &TwiNlpConfig) -> Result<Self> {
        Self::with_toolkit(config, Toolkit::default())
    }

    /// Like [`TwiNlp::new`] with a custom toolkit
    pub fn with_toolkit(config: &TwiNlpConfig, toolkit: Toolkit) -> Result<Self> {
        let fetcher: Box<dyn DatasetFetcher> = if config.auto_download {
            dataset::default_fetcher(config.timeout_secs)
        } else {
            Box::new(OfflineFetcher)
        };
        Self::with_fetcher(config, toolkit, &*fetcher)
    }

    /// Like [`TwiNlp::with_toolkit`] with an explicit fetcher
    pub fn with_fetcher(
        config: &TwiNlpConfig,
        toolkit: Toolkit,
        fetcher: &dyn DatasetFetcher,
    ) -> Result<Self> {
        let path = config.resolved_dataset_path();
        debug!(path = %path.display(), "resolving dataset");

        let mut nlp = TwiNlp {
            lexicon: Lexicon::new(),
            status: DatasetStatus::Empty,
            toolkit,
        };

        if !path.exists() {
            info!(path = %path.display(), "dataset not found locally, trying remote copy");
            if let Err(e) = dataset::download_dataset(fetcher, &config.dataset_url, &path) {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "dataset unavailable, continuing with an empty lexicon"
                );
                nlp.status = DatasetStatus::Unavailable {
                    path,
                    reason: e.to_string(),
                };
                return Ok(nlp);
            }
        }

        nlp.load_dataset(&path)?;
        Ok(nlp)
    }

    /// Replace the lexicon with the contents of `path`.
    ///
    /// The new dataset is parsed completely before anything is swapped, so on
    /// error the previous lexicon stays in place.
    pub fn load_dataset(&mut self, path: &Path) -> Result<()> {
        let lexicon = Lexicon::from_path(path)?;
        info!(
            path = %path.display(),
            rows = lexicon.len(),
            words = lexicon.distinct_len(),
            "dataset loaded"
        );
        self.status = DatasetStatus::Loaded {
            path: path.to_path_buf(),
            rows: lexicon.len(),
        };
        self.lexicon = lexicon;
        Ok(())
    }

    /// Replace the lexicon with one built elsewhere
    pub fn set_lexicon(&mut self, lexicon: Lexicon) {
        self.status = DatasetStatus::InMemory {
            rows: lexicon.len(),
        };
        self.lexicon = lexicon;
    }

    /// English translation of a Twi word
    pub fn translate(&self, word: &str) -> Option<&str> {
        self.lexicon.translate(word)
    }

    /// Translation, or [`TRANSLATION_NOT_FOUND`]
    pub fn translate_or_sentinel(&self, word: &str) -> &str {
        self.translate(word).unwrap_or(TRANSLATION_NOT_FOUND)
    }

    /// Part-of-speech tag of a Twi word
    pub fn pos(&self, word: &str) -> Option<&str> {
        self.lexicon.pos(word)
    }

    /// POS tag, or [`POS_NOT_FOUND`]
    pub fn pos_or_sentinel(&self, word: &str) -> &str {
        self.pos(word).unwrap_or(POS_NOT_FOUND)
    }

    /// Translation and POS tag together
    pub fn lookup(&self, word: &str) -> Option<&LexiconEntry> {
        self.lexicon.get(word)
    }

    /// Twi words containing `keyword`, in dataset order
    pub fn search(&self, keyword: &str) -> Vec<&str> {
        self.lexicon.search(keyword)
    }

    /// Split text into tokens
    pub fn tokenize<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.toolkit.tokenizer.tokenize(text)
    }

    /// Stem and lemmatize a Twi word through its English translation
    pub fn stem_and_lemmatize(&self, twi_word: &str) -> StemLemma {
        match self.translate(twi_word) {
            Some(english) => self.toolkit.analyze(english),
            None => StemLemma::not_available(),
        }
    }

    /// Twi words in dataset order
    pub fn words(&self) -> &[String] {
        self.lexicon.words()
    }

    /// Number of loaded rows
    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    /// Whether the lexicon is empty
    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    /// Where the current lexicon came from
    pub fn status(&self) -> &DatasetStatus {
        &self.status
    }

    /// The underlying lexicon
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The text-processing capabilities in use
    pub fn toolkit(&self) -> &Toolkit {
        &self.toolkit
    }
}

impl Default for TwiNlp {
    fn default() -> Self {
        Self::empty()
    }
}

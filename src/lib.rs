//! # twi-nlp
//!
//! A dataset-backed lexicon for the Twi language.
//!
//! The lexicon is loaded from a CSV with `Twi`, `English` and `POS` columns and
//! offers translation, part-of-speech lookup and substring search. Stemming and
//! lemmatization are done on the English translation of a word, since no
//! Twi-native morphological analyser exists.
//!
//! ## Quick Start
//!
//! ```rust
//! use twi_nlp::{Lexicon, TwiNlp};
//!
//! let csv = "Twi,English,POS\nyɛbɛkɔ,Going,VERB\nnsuo,water,NOUN\n";
//! let mut nlp = TwiNlp::empty();
//! nlp.set_lexicon(Lexicon::from_csv_bytes(csv.as_bytes()).unwrap());
//!
//! assert_eq!(nlp.translate("nsuo"), Some("water"));
//! assert_eq!(nlp.pos_or_sentinel("ɔkɔm"), "POS not found");
//!
//! let analysis = nlp.stem_and_lemmatize("yɛbɛkɔ");
//! assert_eq!(analysis.stemmed, "go");
//! ```
//!
//! ## Loading the Published Dataset
//!
//! [`TwiNlp::new`] reads `data/twi_words.csv` (or the configured path) and, with
//! the `download` feature, fetches it from GitHub when it is missing:
//!
//! ```no_run
//! use twi_nlp::{TwiNlp, TwiNlpConfig};
//!
//! let nlp = TwiNlp::new(&TwiNlpConfig::default()).unwrap();
//! println!("{:?}", nlp.status());
//! ```
//!
//! ## Python Bindings
//!
//! With the `python` feature this crate builds a Python extension exposing a
//! `TwiNLP` class.

pub mod config;
pub mod dataset;
pub mod encoding;
pub mod error;
pub mod lexicon;
pub mod morphology;
pub mod tokenizer;
pub mod twi_nlp;

// Python bindings (only compiled when the "python" feature is enabled)
#[cfg(feature = "python")]
pub mod python;

// Re-export main types for convenience
pub use config::TwiNlpConfig;
pub use dataset::{DatasetFetcher, OfflineFetcher, DEFAULT_DATASET_URL};
pub use error::{FetchError, LexiconError};
pub use lexicon::{Lexicon, LexiconBuilder, LexiconEntry};
pub use morphology::{Lemmatize, SnowballStemmer, Stem, StemLemma, SuffixLemmatizer, Toolkit};
pub use tokenizer::{TextTokenizer, WordTokenizer};
pub use twi_nlp::{DatasetStatus, TwiNlp, POS_NOT_FOUND, TRANSLATION_NOT_FOUND};

#[cfg(feature = "download")]
pub use dataset::HttpFetcher;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Python bindings for twi-nlp using PyO3
//!
//! Exposes a `TwiNLP` class mirroring the Rust [`TwiNlp`] facade. Lookups
//! return the "not found" strings at this boundary, as Python callers expect.

use std::path::Path;

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::config::TwiNlpConfig;
use crate::dataset;
use crate::error::LexiconError;
use crate::morphology::StemLemma;
use crate::twi_nlp::{DatasetStatus, TwiNlp};

/// Unreadable files raise `IOError`; malformed datasets raise `ValueError`
fn lexicon_error(e: LexiconError) -> PyErr {
    if e.is_schema_error() {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
    } else {
        PyErr::new::<pyo3::exceptions::PyIOError, _>(e.to_string())
    }
}

/// Twi lexicon: translation, POS tags, search, tokenization and stemming
///
/// Example:
///     >>> from twi_nlp import TwiNLP
///     >>> nlp = TwiNLP()  # downloads data/twi_words.csv if missing
///     >>> nlp.translate("nsuo")
///     'water'
#[pyclass(name = "TwiNLP")]
pub struct PyTwiNlp {
    inner: TwiNlp,
}

#[pymethods]
impl PyTwiNlp {
    /// Create a new TwiNLP.
    ///
    /// Args:
    ///     filepath: Path to the CSV dataset (default: data/twi_words.csv)
    ///     auto_download: Fetch the dataset from GitHub when missing (default: True)
    ///
    /// A missing dataset that cannot be downloaded leaves the lexicon empty.
    #[new]
    #[pyo3(signature = (filepath=None, auto_download=true))]
    fn new(filepath: Option<&str>, auto_download: bool) -> PyResult<Self> {
        let config = TwiNlpConfig {
            dataset_path: filepath.map(Into::into),
            auto_download,
            ..Default::default()
        };

        let inner = TwiNlp::new(&config).map_err(lexicon_error)?;
        Ok(PyTwiNlp { inner })
    }

    /// Translate a Twi word to English
    fn translate(&self, word: &str) -> String {
        self.inner.translate_or_sentinel(word).to_string()
    }

    /// Get the POS tag of a Twi word
    fn get_pos(&self, word: &str) -> String {
        self.inner.pos_or_sentinel(word).to_string()
    }

    /// Twi words containing the keyword, in dataset order
    fn search(&self, keyword: &str) -> Vec<String> {
        self.inner
            .search(keyword)
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Split text into tokens
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.inner.tokenize(text).map(String::from).collect()
    }

    /// Stem and lemmatize a Twi word using its English translation
    fn stem_and_lemmatize<'py>(&self, py: Python<'py>, twi_word: &str) -> PyResult<Bound<'py, PyDict>> {
        stem_lemma_dict(py, &self.inner.stem_and_lemmatize(twi_word))
    }

    /// Replace the lexicon with another dataset
    fn load_dataset(&mut self, filepath: &str) -> PyResult<()> {
        self.inner.load_dataset(Path::new(filepath)).map_err(lexicon_error)
    }

    /// Twi words in dataset order
    #[getter]
    fn words(&self) -> Vec<String> {
        self.inner.words().to_vec()
    }

    /// Whether the dataset was loaded
    #[getter]
    fn loaded(&self) -> bool {
        matches!(
            self.inner.status(),
            DatasetStatus::Loaded { .. } | DatasetStatus::InMemory { .. }
        )
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        match self.inner.status() {
            DatasetStatus::Loaded { path, rows } => {
                format!("TwiNLP(path='{}', rows={})", path.display(), rows)
            }
            DatasetStatus::Unavailable { path, .. } => {
                format!("TwiNLP(path='{}', unavailable)", path.display())
            }
            DatasetStatus::InMemory { rows } => format!("TwiNLP(in_memory, rows={})", rows),
            DatasetStatus::Empty => "TwiNLP(empty)".to_string(),
        }
    }
}

fn stem_lemma_dict<'py>(py: Python<'py>, result: &StemLemma) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("Stemmed", &result.stemmed)?;
    dict.set_item("Lemmatized", &result.lemmatized)?;
    if let Some(ref english) = result.english_equivalent {
        dict.set_item("English Equivalent", english)?;
    }
    Ok(dict)
}

/// Download the dataset to a path
///
/// Args:
///     filepath: Destination (default: data/twi_words.csv)
///     url: Source URL (default: the published dataset)
///
/// Returns:
///     Path the dataset was written to
#[pyfunction]
#[pyo3(signature = (filepath=None, url=None))]
fn download_dataset(filepath: Option<&str>, url: Option<&str>) -> PyResult<String> {
    let path = filepath
        .map(std::path::PathBuf::from)
        .unwrap_or_else(dataset::default_dataset_path);
    let url = url.unwrap_or(dataset::DEFAULT_DATASET_URL);
    let fetcher = dataset::default_fetcher(30);

    let stored = dataset::download_dataset(&*fetcher, url, &path)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))?;
    Ok(stored.to_string_lossy().to_string())
}

/// Create the Python module
#[pymodule]
fn twi_nlp(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTwiNlp>()?;
    m.add_function(wrap_pyfunction!(download_dataset, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}

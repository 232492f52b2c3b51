//! Stemming and lemmatization of English words.
//!
//! Twi words are analysed through their English translation, so everything in
//! this module operates on English text. The [`Toolkit`] bundles the tokenizer,
//! stemmer and lemmatizer so callers (and tests) can swap any of them.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use rust_stemmers::Algorithm;
use serde::{Deserialize, Serialize};

use crate::tokenizer::{TextTokenizer, WordTokenizer};

/// Placeholder used when a word has no translation to analyse
pub const NOT_AVAILABLE: &str = "N/A";

/// Reduces a word to its stem
pub trait Stem: Send + Sync {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

/// Reduces a word to its dictionary form
pub trait Lemmatize: Send + Sync {
    fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

/// English Snowball (Porter2) stemmer
pub struct SnowballStemmer {
    inner: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    pub fn new() -> Self {
        SnowballStemmer {
            inner: rust_stemmers::Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stem for SnowballStemmer {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.inner.stem(word)
    }
}

/// Irregular English plurals
const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("lice", "louse"),
    ("men", "man"),
    ("mice", "mouse"),
    ("oxen", "ox"),
    ("people", "person"),
    ("teeth", "tooth"),
    ("women", "woman"),
];

/// Suffix rewrites tried in order; the first match wins
const NOUN_SUFFIXES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("zes", "z"),
    ("ies", "y"),
];

/// Endings that look plural but are not
const INVARIANT_ENDINGS: &[&str] = &["ss", "us", "is"];

/// Rule-based noun lemmatizer.
///
/// Words are treated as nouns, as a WordNet lemmatizer does by default, so
/// only plural inflection is undone and verb forms pass through unchanged.
/// A custom lemma table takes priority over the rules.
#[derive(Debug, Clone, Default)]
pub struct SuffixLemmatizer {
    lemmas: HashMap<String, String>,
}

impl SuffixLemmatizer {
    pub fn new() -> Self {
        SuffixLemmatizer::default()
    }

    /// Add explicit `form -> lemma` pairs
    pub fn with_lemmas<I, K, V>(mut self, lemmas: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.lemmas
            .extend(lemmas.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

impl Lemmatize for SuffixLemmatizer {
    fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if let Some(lemma) = self.lemmas.get(word) {
            return Cow::Owned(lemma.clone());
        }
        if let Some((_, lemma)) = IRREGULAR_NOUNS.iter().find(|(form, _)| *form == word) {
            return Cow::Borrowed(*lemma);
        }
        if word.chars().count() <= 3 || INVARIANT_ENDINGS.iter().any(|e| word.ends_with(e)) {
            return Cow::Borrowed(word);
        }
        for (suffix, replacement) in NOUN_SUFFIXES {
            if let Some(stem) = word.strip_suffix(suffix) {
                return Cow::Owned(format!("{stem}{replacement}"));
            }
        }
        match word.strip_suffix('s') {
            Some(stem) => Cow::Borrowed(stem),
            None => Cow::Borrowed(word),
        }
    }
}

/// The text-processing capabilities used by [`TwiNlp`](crate::TwiNlp)
pub struct Toolkit {
    pub tokenizer: Box<dyn TextTokenizer>,
    pub stemmer: Box<dyn Stem>,
    pub lemmatizer: Box<dyn Lemmatize>,
}

impl Toolkit {
    /// Replace the tokenizer
    pub fn with_tokenizer(mut self, tokenizer: impl TextTokenizer + 'static) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    /// Replace the stemmer
    pub fn with_stemmer(mut self, stemmer: impl Stem + 'static) -> Self {
        self.stemmer = Box::new(stemmer);
        self
    }

    /// Replace the lemmatizer
    pub fn with_lemmatizer(mut self, lemmatizer: impl Lemmatize + 'static) -> Self {
        self.lemmatizer = Box::new(lemmatizer);
        self
    }

    /// Stem and lemmatize an English word (lower-cased first)
    pub fn analyze(&self, english: &str) -> StemLemma {
        let lower = english.to_lowercase();
        StemLemma {
            stemmed: self.stemmer.stem(&lower).into_owned(),
            lemmatized: self.lemmatizer.lemmatize(&lower).into_owned(),
            english_equivalent: Some(english.to_string()),
        }
    }
}

impl Default for Toolkit {
    fn default() -> Self {
        Toolkit {
            tokenizer: Box::new(WordTokenizer::new()),
            stemmer: Box::new(SnowballStemmer::new()),
            lemmatizer: Box::new(SuffixLemmatizer::new()),
        }
    }
}

impl fmt::Debug for Toolkit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toolkit").finish_non_exhaustive()
    }
}

/// Result of analysing a Twi word through its English translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemLemma {
    #[serde(rename = "Stemmed")]
    pub stemmed: String,
    #[serde(rename = "Lemmatized")]
    pub lemmatized: String,
    /// The translation that was analysed; `None` when the word is unknown
    #[serde(
        rename = "English Equivalent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub english_equivalent: Option<String>,
}

impl StemLemma {
    /// The result for a word without a translation
    pub fn not_available() -> Self {
        StemLemma {
            stemmed: NOT_AVAILABLE.to_string(),
            lemmatized: NOT_AVAILABLE.to_string(),
            english_equivalent: None,
        }
    }

    /// Whether a translation was found and analysed
    pub fn is_available(&self) -> bool {
        self.english_equivalent.is_some()
    }
}

impl fmt::Display for StemLemma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stemmed={} lemmatized={}", self.stemmed, self.lemmatized)?;
        if let Some(ref english) = self.english_equivalent {
            write!(f, " english={}", english)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowball_stemmer() {
        let stemmer = SnowballStemmer::new();
        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("dogs"), "dog");
    }

    #[test]
    fn test_lemmatizer_plural_rules() {
        let lemmatizer = SuffixLemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("dogs"), "dog");
        assert_eq!(lemmatizer.lemmatize("berries"), "berry");
        assert_eq!(lemmatizer.lemmatize("boxes"), "box");
        assert_eq!(lemmatizer.lemmatize("churches"), "church");
        assert_eq!(lemmatizer.lemmatize("glasses"), "glass");
    }

    #[test]
    fn test_lemmatizer_leaves_non_plurals() {
        let lemmatizer = SuffixLemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("running"), "running");
        assert_eq!(lemmatizer.lemmatize("glass"), "glass");
        assert_eq!(lemmatizer.lemmatize("bus"), "bus");
        assert_eq!(lemmatizer.lemmatize("yes"), "yes");
    }

    #[test]
    fn test_lemmatizer_irregular_and_custom() {
        let lemmatizer = SuffixLemmatizer::new().with_lemmas([("went", "go")]);
        assert_eq!(lemmatizer.lemmatize("children"), "child");
        assert_eq!(lemmatizer.lemmatize("went"), "go");
    }

    #[test]
    fn test_analyze_lowercases() {
        let result = Toolkit::default().analyze("Running");
        assert_eq!(result.stemmed, "run");
        assert_eq!(result.lemmatized, "running");
        assert_eq!(result.english_equivalent.as_deref(), Some("Running"));
    }

    #[test]
    fn test_not_available_json() {
        let json = serde_json::to_string(&StemLemma::not_available()).unwrap();
        assert_eq!(json, r#"{"Stemmed":"N/A","Lemmatized":"N/A"}"#);
    }
}

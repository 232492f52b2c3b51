//! The dataset-backed Twi lexicon.
//!
//! A lexicon is built from a CSV with `Twi`, `English` and `POS` columns. Rows
//! keep their dataset order in [`Lexicon::words`]; the translation and POS maps
//! are keyed by the Twi word, so a duplicated word resolves to its last row.
//!
//! Twi words and query keys are NFC-normalised so tone marks match in either
//! Unicode form. Every other character, whitespace included, is kept as is.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::encoding;
use crate::error::{LexiconError, Result};

/// Header of the Twi column
pub const TWI_COLUMN: &str = "Twi";
/// Header of the English column
pub const ENGLISH_COLUMN: &str = "English";
/// Header of the part-of-speech column
pub const POS_COLUMN: &str = "POS";

/// One dataset row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub twi: String,
    pub english: String,
    pub pos: String,
}

impl LexiconEntry {
    pub fn new(twi: &str, english: &str, pos: &str) -> Self {
        LexiconEntry {
            twi: normalize(twi),
            english: english.to_string(),
            pos: pos.to_string(),
        }
    }
}

/// In-memory lookup structures for one loaded dataset
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    /// Twi words in row order, duplicates included
    words: Vec<String>,
    /// Twi word -> last row carrying it
    entries: HashMap<String, LexiconEntry>,
}

impl Lexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Lexicon::default()
    }

    /// Build a lexicon from rows, in order
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = LexiconEntry>,
    {
        let mut builder = LexiconBuilder::new();
        for entry in entries {
            builder.push(entry);
        }
        builder.build()
    }

    /// Parse a lexicon from raw CSV bytes, detecting their encoding first
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self> {
        let text = encoding::decode(bytes)?;
        let mut builder = LexiconBuilder::new();
        builder.load_csv(&text)?;
        Ok(builder.build())
    }

    /// Read and parse a dataset file
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv_bytes(&bytes)
    }

    /// Number of rows loaded (duplicates counted)
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no rows are loaded
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct Twi words
    pub fn distinct_len(&self) -> usize {
        self.entries.len()
    }

    /// Twi words in dataset order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The entry for a Twi word (last row wins)
    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(normalize(word).as_str())
    }

    /// English translation of a Twi word
    pub fn translate(&self, word: &str) -> Option<&str> {
        self.get(word).map(|e| e.english.as_str())
    }

    /// Part-of-speech tag of a Twi word
    pub fn pos(&self, word: &str) -> Option<&str> {
        self.get(word).map(|e| e.pos.as_str())
    }

    /// Twi words containing `keyword`, in dataset order.
    ///
    /// Matching is a case-sensitive substring test. Duplicates are kept and an
    /// empty keyword matches every word.
    pub fn search(&self, keyword: &str) -> Vec<&str> {
        let keyword = normalize(keyword);
        self.words
            .iter()
            .filter(|w| w.contains(keyword.as_str()))
            .map(String::as_str)
            .collect()
    }
}

/// Accumulates rows and builds a [`Lexicon`]
pub struct LexiconBuilder {
    lexicon: Lexicon,
    duplicates: usize,
}

impl LexiconBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        LexiconBuilder {
            lexicon: Lexicon::new(),
            duplicates: 0,
        }
    }

    /// Append one row; a repeated Twi word replaces the earlier mapping
    pub fn push(&mut self, entry: LexiconEntry) {
        if entry.twi.is_empty() {
            return;
        }
        self.lexicon.words.push(entry.twi.clone());
        if self
            .lexicon
            .entries
            .insert(entry.twi.clone(), entry)
            .is_some()
        {
            self.duplicates += 1;
        }
    }

    /// Load rows from CSV text with a header row.
    ///
    /// Columns are located by their exact name, so their order does not matter
    /// and extra columns are ignored. A record whose field count differs from
    /// the header is a CSV error. Nothing is added unless every row parses.
    pub fn load_csv(&mut self, csv_content: &str) -> Result<()> {
        let mut reader = csv::ReaderBuilder::new().from_reader(csv_content.as_bytes());

        let headers = reader.headers()?.clone();
        let column = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(LexiconError::MissingColumn(name))
        };
        let twi = column(TWI_COLUMN)?;
        let english = column(ENGLISH_COLUMN)?;
        let pos = column(POS_COLUMN)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let field = |idx: usize| record.get(idx).unwrap_or("");
            rows.push(LexiconEntry::new(field(twi), field(english), field(pos)));
        }

        for row in rows {
            self.push(row);
        }
        Ok(())
    }

    /// Build and return the lexicon
    pub fn build(self) -> Lexicon {
        if self.duplicates > 0 {
            debug!(
                duplicates = self.duplicates,
                "duplicate Twi words resolved to their last row"
            );
        }
        self.lexicon
    }
}

impl Default for LexiconBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// NFC-normalise a Twi word or lookup key
fn normalize(s: &str) -> String {
    s.nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "Twi,English,POS\nme,I,PRON\nwo,you,PRON\nme,mine,PRON\n";

    fn lexicon(csv: &str) -> Lexicon {
        let mut builder = LexiconBuilder::new();
        builder.load_csv(csv).unwrap();
        builder.build()
    }

    #[test]
    fn test_last_row_wins() {
        let lex = lexicon(CSV);

        assert_eq!(lex.translate("me"), Some("mine"));
        assert_eq!(lex.translate("wo"), Some("you"));
        assert_eq!(lex.words(), ["me", "wo", "me"]);
        assert_eq!(lex.len(), 3);
        assert_eq!(lex.distinct_len(), 2);
    }

    #[test]
    fn test_missing_word() {
        let lex = lexicon(CSV);
        assert_eq!(lex.translate("ɔkɔm"), None);
        assert_eq!(lex.pos("ɔkɔm"), None);
    }

    #[test]
    fn test_column_order_and_extra_columns() {
        let lex = lexicon("POS,Notes,English,Twi\nNOUN,x,water,nsuo\n");
        assert_eq!(lex.translate("nsuo"), Some("water"));
        assert_eq!(lex.pos("nsuo"), Some("NOUN"));
    }

    #[test]
    fn test_missing_column() {
        let mut builder = LexiconBuilder::new();
        let err = builder.load_csv("Twi,English\nme,I\n").unwrap_err();
        assert!(matches!(err, LexiconError::MissingColumn("POS")));
        assert!(builder.build().is_empty());
    }

    #[test]
    fn test_search_keeps_order_and_duplicates() {
        let lex = lexicon("Twi,English,POS\nkɔ,go,VERB\nba,come,VERB\nyɛbɛkɔ,we will go,VERB\nkɔ,leave,VERB\n");

        assert_eq!(lex.search("kɔ"), vec!["kɔ", "yɛbɛkɔ", "kɔ"]);
        assert_eq!(lex.search(""), vec!["kɔ", "ba", "yɛbɛkɔ", "kɔ"]);
        assert!(lex.search("zzz").is_empty());
    }

    #[test]
    fn test_search_is_case_sensitive() {
        let lex = lexicon("Twi,English,POS\nKofi,Kofi,PROPN\n");
        assert_eq!(lex.search("Kof"), vec!["Kofi"]);
        assert!(lex.search("kof").is_empty());
    }

    #[test]
    fn test_normalized_lookup() {
        // decomposed "é" in the dataset, precomposed query
        let lex = lexicon("Twi,English,POS\ne\u{301},yes,INTJ\n");
        assert_eq!(lex.translate("\u{e9}"), Some("yes"));
    }

    #[test]
    fn test_empty_twi_cell_is_skipped() {
        let lex = lexicon("Twi,English,POS\n,orphan,NOUN\nme,I,PRON\n");
        assert_eq!(lex.words(), ["me"]);
    }

    #[test]
    fn test_from_entries() {
        let lex = Lexicon::from_entries(vec![
            LexiconEntry::new("me", "I", "PRON"),
            LexiconEntry::new("wo", "you", "PRON"),
        ]);
        assert_eq!(lex.pos("wo"), Some("PRON"));
    }

    #[test]
    fn test_search_keeps_whitespace_in_keyword() {
        let lex = lexicon("Twi,English,POS\ntu mmirika,run,VERB\nme,I,PRON\nwo,you,PRON\n");

        assert_eq!(lex.search(" "), vec!["tu mmirika"]);
        assert!(lex.search("me ").is_empty());
        assert_eq!(lex.search("u m"), vec!["tu mmirika"]);
    }

    #[test]
    fn test_values_are_kept_verbatim() {
        let lex = lexicon("Twi,English,POS\nme, I ,PRON \n");
        assert_eq!(lex.translate("me"), Some(" I "));
        assert_eq!(lex.pos("me"), Some("PRON "));
    }

    #[test]
    fn test_header_names_are_exact() {
        let mut builder = LexiconBuilder::new();
        let err = builder.load_csv(" Twi,English,POS\nme,I,PRON\n").unwrap_err();
        assert!(matches!(err, LexiconError::MissingColumn("Twi")));

        let mut builder = LexiconBuilder::new();
        let err = builder.load_csv("twi,English,POS\nme,I,PRON\n").unwrap_err();
        assert!(matches!(err, LexiconError::MissingColumn("Twi")));
    }

    #[test]
    fn test_short_record_is_rejected() {
        let mut builder = LexiconBuilder::new();
        let err = builder
            .load_csv("Twi,English,POS\nme,I,PRON\nwo,you\n")
            .unwrap_err();

        assert!(matches!(err, LexiconError::Csv(_)));
        assert!(builder.build().is_empty());
    }
}

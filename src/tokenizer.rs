//! Word tokenization.
//!
//! The tokenizer is general purpose and knows nothing about Twi morphology: it
//! splits on whitespace and separates punctuation from words.

use once_cell::sync::Lazy;
use regex::Regex;

/// Words with internal apostrophes or hyphens, an ellipsis, or any single
/// non-space symbol.
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\w+(?:['’\-]\w+)*|\.\.\.|[^\w\s]").expect("valid token regex")
});

/// Something that can split text into tokens.
pub trait TextTokenizer: Send + Sync {
    /// Lazily yield the tokens of `text` in order
    fn tokenize<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a>;
}

/// Regex-based word tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        WordTokenizer
    }

    /// Tokenize without boxing
    pub fn tokens(text: &str) -> Tokens<'_> {
        Tokens {
            inner: WORD_PATTERN.find_iter(text),
        }
    }
}

impl TextTokenizer for WordTokenizer {
    fn tokenize<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        Box::new(Self::tokens(text))
    }
}

/// Iterator over the tokens of a string
pub struct Tokens<'t> {
    inner: regex::Matches<'static, 't>,
}

impl<'t> Iterator for Tokens<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        self.inner.next().map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(text: &str) -> Vec<&str> {
        WordTokenizer.tokenize(text).collect()
    }

    #[test]
    fn test_words_and_punctuation() {
        assert_eq!(
            tokenize("Me din de Kofi. Wo ho te sɛn?"),
            vec!["Me", "din", "de", "Kofi", ".", "Wo", "ho", "te", "sɛn", "?"]
        );
    }

    #[test]
    fn test_twi_letters_stay_in_words() {
        assert_eq!(tokenize("yɛbɛkɔ Ɔkɔmfo"), vec!["yɛbɛkɔ", "Ɔkɔmfo"]);
    }

    #[test]
    fn test_internal_apostrophe_and_hyphen() {
        assert_eq!(tokenize("don't well-known"), vec!["don't", "well-known"]);
    }

    #[test]
    fn test_ellipsis() {
        assert_eq!(tokenize("wait... ok!"), vec!["wait", "...", "ok", "!"]);
    }

    #[test]
    fn test_empty() {
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_lazy() {
        let mut tokens = WordTokenizer::tokens("a b c");
        assert_eq!(tokens.next(), Some("a"));
        assert_eq!(tokens.next(), Some("b"));
    }
}

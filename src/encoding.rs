//! Encoding detection for dataset files.
//!
//! Datasets exported from spreadsheets are not reliably UTF-8, so the raw bytes
//! are sniffed before the CSV reader sees them.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

use crate::error::{LexiconError, Result};

/// Guess the encoding of `bytes`.
///
/// A byte order mark wins. Otherwise valid UTF-8 is taken as UTF-8 and anything
/// else falls back to Windows-1252.
pub fn detect(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    if std::str::from_utf8(bytes).is_ok() {
        UTF_8
    } else {
        WINDOWS_1252
    }
}

/// Decode `bytes` using the detected encoding, stripping any BOM.
pub fn decode(bytes: &[u8]) -> Result<Cow<'_, str>> {
    let encoding = detect(bytes);
    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(LexiconError::Decode {
            encoding: encoding.name(),
        });
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::UTF_16LE;

    #[test]
    fn test_plain_utf8() {
        let bytes = "Twi,English,POS\nyɛbɛkɔ,we will go,VERB\n".as_bytes();
        assert_eq!(detect(bytes), UTF_8);
        assert!(decode(bytes).unwrap().contains("yɛbɛkɔ"));
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"Twi,English,POS\n");
        assert_eq!(detect(&bytes), UTF_8);
        assert!(decode(&bytes).unwrap().starts_with("Twi"));
    }

    #[test]
    fn test_utf16le_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "Twi".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(detect(&bytes), UTF_16LE);
        assert_eq!(decode(&bytes).unwrap(), "Twi");
    }

    #[test]
    fn test_latin1_fallback() {
        // "café" in Windows-1252
        let bytes = b"caf\xE9";
        assert_eq!(detect(bytes), WINDOWS_1252);
        assert_eq!(decode(bytes).unwrap(), "café");
    }
}

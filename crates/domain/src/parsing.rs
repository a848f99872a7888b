//! Tolerant record parsers.
//!
//! Each parser maps one non-blank line (or one token) to a [`ParsedValue`];
//! none of them fail hard. Callers decide whether an invalid record is dropped,
//! replaced by a sentinel, or merely counted.

use crate::model::ParsedValue;

/// Parses a trimmed line as a floating-point number (`"3"`, `"-2.5"`, `"1e3"`).
pub fn parse_number(text: &str) -> ParsedValue<f64> {
    let cleaned = text.trim();
    match cleaned.parse::<f64>() {
        Ok(value) => ParsedValue::Valid(value),
        Err(_) => ParsedValue::Invalid(cleaned.to_string()),
    }
}

/// Parses a trimmed line as a base-10 integer with an optional sign.
///
/// Magnitudes outside `i64` are reported as invalid rather than widened.
pub fn parse_integer(text: &str) -> ParsedValue<i64> {
    let cleaned = text.trim();
    match cleaned.parse::<i64>() {
        Ok(value) => ParsedValue::Valid(value),
        Err(_) => ParsedValue::Invalid(cleaned.to_string()),
    }
}

/// Removes leading and trailing characters that are not alphanumeric.
pub fn strip_non_alnum_edges(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Canonical form of a word: lower-cased, then edges stripped.
///
/// Lower-casing can expand a letter into a base letter plus a combining mark
/// (`İ` becomes `i\u{307}`), so the edges are stripped after it.
pub fn normalize_word(token: &str) -> String {
    strip_non_alnum_edges(&token.to_lowercase()).to_string()
}

/// Normalizes a token; punctuation-only tokens come back as `Invalid(token)`.
pub fn parse_word(token: &str) -> ParsedValue<String> {
    let word = normalize_word(token);
    if word.is_empty() { ParsedValue::Invalid(token.to_string()) } else { ParsedValue::Valid(word) }
}

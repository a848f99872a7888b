use std::collections::BTreeMap;

use linestat_shared_kernel::TokenCount;
use serde::Serialize;

use crate::{model::ParsedValue, parsing::parse_word};

/// Occurrences of one normalized word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    pub word: String,
    pub count: usize,
}

/// Word tally keyed by normalized form, iterated in code-point order.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies {
    counts: BTreeMap<String, usize>,
    tokens: TokenCount,
    valid: TokenCount,
}

impl WordFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one raw token. Punctuation-only tokens still advance the token total.
    pub fn record(&mut self, token: &str) -> ParsedValue<String> {
        self.tokens.increment();
        let parsed = parse_word(token);
        if let ParsedValue::Valid(word) = &parsed {
            self.valid.increment();
            *self.counts.entry(word.clone()).or_insert(0) += 1;
        }
        parsed
    }

    pub fn tokens(&self) -> TokenCount {
        self.tokens
    }

    pub fn valid_words(&self) -> TokenCount {
        self.valid
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    pub fn entries(&self) -> Vec<WordEntry> {
        self.iter().map(|(word, count)| WordEntry { word: word.to_string(), count }).collect()
    }
}

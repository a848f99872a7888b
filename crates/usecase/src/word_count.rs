use std::{path::Path, time::Instant};

use linestat_domain::{analytics::WordFrequencies, model::ParsedValue};
use linestat_ports::{
    diagnostics::{Diagnostic, DiagnosticSink, Recovery},
    report::WordCountSummary,
    source::LineSource,
};
use linestat_shared_kernel::{DomainError, RecordKind, Result};
use tracing::debug;

/// Frequency of every normalized word in a file.
pub struct CountWords<'a> {
    source: &'a dyn LineSource,
    diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> CountWords<'a> {
    pub fn new(source: &'a dyn LineSource, diagnostics: &'a dyn DiagnosticSink) -> Self {
        Self { source, diagnostics }
    }

    pub fn run(&self, path: &Path) -> Result<WordCountSummary> {
        let lines = self.source.open(path)?;
        let started = Instant::now();

        let mut frequencies = WordFrequencies::new();
        for line in lines {
            let line = line?;
            for token in line.text.split_whitespace() {
                if let ParsedValue::Invalid(text) = frequencies.record(token) {
                    let malformed = DomainError::MalformedRecord { line: line.number, text, kind: RecordKind::Word };
                    self.diagnostics.report(&Diagnostic::from_error(malformed, Recovery::Skipped))?;
                }
            }
        }

        let elapsed = started.elapsed();
        debug!(
            file = %path.display(),
            tokens = %frequencies.tokens(),
            distinct = frequencies.distinct(),
            ?elapsed,
            "words counted"
        );

        Ok(WordCountSummary {
            file: path.to_path_buf(),
            elapsed,
            tokens: frequencies.tokens(),
            valid_words: frequencies.valid_words(),
            words: frequencies.entries(),
        })
    }
}

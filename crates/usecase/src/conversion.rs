use std::{path::Path, time::Instant};

use linestat_domain::{analytics::ConversionTable, model::ParsedValue, parsing::parse_integer, radix::ConversionSettings};
use linestat_ports::{
    diagnostics::{Diagnostic, DiagnosticSink, Recovery},
    report::ConversionSummary,
    source::LineSource,
};
use linestat_shared_kernel::{DomainError, RecordKind, Result};
use tracing::debug;

/// Binary and hexadecimal rendering of every integer line of a file.
pub struct ConvertNumbers<'a> {
    source: &'a dyn LineSource,
    diagnostics: &'a dyn DiagnosticSink,
    settings: ConversionSettings,
}

impl<'a> ConvertNumbers<'a> {
    pub fn new(source: &'a dyn LineSource, diagnostics: &'a dyn DiagnosticSink, settings: ConversionSettings) -> Self {
        Self { source, diagnostics, settings }
    }

    /// Every non-blank line becomes a row; malformed ones carry the sentinel.
    pub fn run(&self, path: &Path) -> Result<ConversionSummary> {
        let lines = self.source.open(path)?;
        let started = Instant::now();

        let mut table = ConversionTable::new(self.settings.clone());
        for line in lines {
            let line = line?;
            let parsed = parse_integer(&line.text);
            if let ParsedValue::Invalid(text) = &parsed {
                let malformed = DomainError::MalformedRecord {
                    line: line.number,
                    text: text.clone(),
                    kind: RecordKind::Integer,
                };
                let recovery = Recovery::Substituted(self.settings.sentinel().to_string());
                self.diagnostics.report(&Diagnostic::from_error(malformed, recovery))?;
            }
            table.push(parsed);
        }

        let elapsed = started.elapsed();
        debug!(
            file = %path.display(),
            rows = table.len(),
            invalid = table.invalid_count(),
            ?elapsed,
            "conversion table built"
        );

        Ok(ConversionSummary { file: path.to_path_buf(), elapsed, rows: table.into_rows() })
    }
}

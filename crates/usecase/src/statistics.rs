use std::{path::Path, time::Instant};

use linestat_domain::{analytics::NumberSample, parsing::parse_number};
use linestat_ports::{
    diagnostics::{Diagnostic, DiagnosticSink, Recovery},
    report::StatisticsSummary,
    source::LineSource,
};
use linestat_shared_kernel::{ApplicationError, RecordKind, Result};
use tracing::debug;

/// Mean, median, mode and population spread of the numeric lines of a file.
pub struct ComputeStatistics<'a> {
    source: &'a dyn LineSource,
    diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> ComputeStatistics<'a> {
    pub fn new(source: &'a dyn LineSource, diagnostics: &'a dyn DiagnosticSink) -> Self {
        Self { source, diagnostics }
    }

    /// Malformed lines are reported and dropped; a file with none accepted is an error.
    pub fn run(&self, path: &Path) -> Result<StatisticsSummary> {
        let lines = self.source.open(path)?;
        let started = Instant::now();

        let mut sample = NumberSample::new();
        for line in lines {
            let line = line?;
            match parse_number(&line.text).into_result(line.number, RecordKind::Number) {
                Ok(value) => sample.push(value),
                Err(err) => self.diagnostics.report(&Diagnostic::from_error(err, Recovery::Skipped))?,
            }
        }

        let statistics = sample
            .summarize()
            .ok_or_else(|| ApplicationError::NoValidData { path: path.to_path_buf() })?;
        let elapsed = started.elapsed();
        debug!(file = %path.display(), count = statistics.count, ?elapsed, "statistics computed");

        Ok(StatisticsSummary { file: path.to_path_buf(), elapsed, statistics })
    }
}

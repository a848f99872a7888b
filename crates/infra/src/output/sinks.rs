use std::{
    io::{self, Write},
    path::PathBuf,
};

use linestat_ports::report::{Report, ReportSink};
use linestat_shared_kernel::Result;
use tracing::debug;

use crate::persistence::FileWriter;

/// Writes the report to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn publish(&self, report: &Report) -> Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(report.as_str().as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Overwrites a results file with the report.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for FileSink {
    fn publish(&self, report: &Report) -> Result<()> {
        FileWriter::overwrite(&self.path, report.as_str().as_bytes())?;
        debug!(path = %self.path.display(), bytes = report.as_str().len(), "results file written");
        Ok(())
    }
}

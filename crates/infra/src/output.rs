pub mod formatters;
mod sinks;

use linestat_domain::options::OutputFormat;
use linestat_ports::report::{Report, ReportRenderer, RunSummary};
use linestat_shared_kernel::{InfrastructureError, Result};

pub use sinks::{ConsoleSink, FileSink};

/// Renders run summaries in the configured output format.
#[derive(Debug, Clone, Copy)]
pub struct FormatRenderer {
    format: OutputFormat,
}

impl FormatRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl ReportRenderer for FormatRenderer {
    fn render(&self, summary: &RunSummary) -> Result<Report> {
        let mut buf = Vec::new();
        match self.format {
            OutputFormat::Text => formatters::output_text(summary, &mut buf)?,
            OutputFormat::Json => formatters::output_json(summary, &mut buf)?,
        }
        let body = String::from_utf8(buf).map_err(|err| InfrastructureError::OutputError {
            message: "report is not valid UTF-8".to_string(),
            source: Some(Box::new(err)),
        })?;
        Ok(Report::new(body))
    }
}

use linestat_ports::report::{Report, ReportRenderer, ReportSink, RunSummary};
use linestat_shared_kernel::{ErrorContext, Result};
use tracing::debug;

/// Renders a summary once and writes the identical text to every sink, in order.
pub struct PublishReport<'a> {
    renderer: &'a dyn ReportRenderer,
    sinks: Vec<&'a dyn ReportSink>,
}

impl<'a> PublishReport<'a> {
    pub fn new(renderer: &'a dyn ReportRenderer, sinks: Vec<&'a dyn ReportSink>) -> Self {
        Self { renderer, sinks }
    }

    pub fn run(&self, summary: &RunSummary) -> Result<Report> {
        let report = self
            .renderer
            .render(summary)
            .with_context(|| format!("rendering report for {}", summary.file().display()))?;
        for sink in &self.sinks {
            sink.publish(&report)
                .with_context(|| format!("publishing report for {}", summary.file().display()))?;
        }
        debug!(file = %summary.file().display(), sinks = self.sinks.len(), "report published");
        Ok(report)
    }
}

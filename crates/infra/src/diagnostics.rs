use std::io::{self, Write};

use linestat_ports::diagnostics::{Diagnostic, DiagnosticSink};
use linestat_shared_kernel::Result;
use tracing::debug;

/// Prints malformed-record diagnostics on standard output as they occur.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleDiagnostics;

impl DiagnosticSink for ConsoleDiagnostics {
    fn report(&self, diagnostic: &Diagnostic) -> Result<()> {
        debug!(line = %diagnostic.line, text = %diagnostic.text, kind = %diagnostic.kind, "malformed record");
        writeln!(io::stdout().lock(), "{diagnostic}")?;
        Ok(())
    }
}

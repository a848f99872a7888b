use std::{cell::RefCell, path::Path};

use linestat_ports::{
    diagnostics::{Diagnostic, DiagnosticSink},
    source::{LineSource, LineStream},
};
use linestat_shared_kernel::{InfrastructureError, LineNumber, RawLine, Result};

/// In-memory file: blank lines are numbered but not yielded, like the real reader.
pub(crate) struct StubSource {
    lines: Vec<String>,
}

impl StubSource {
    pub(crate) fn new(lines: &[&str]) -> Self {
        Self { lines: lines.iter().map(|l| l.to_string()).collect() }
    }
}

impl LineSource for StubSource {
    fn open(&self, _path: &Path) -> Result<LineStream<'_>> {
        let stream = self
            .lines
            .iter()
            .enumerate()
            .map(|(index, text)| RawLine::new(LineNumber::from_index(index), text.clone()))
            .filter(|line| !line.is_blank())
            .map(Ok);
        Ok(Box::new(stream))
    }
}

pub(crate) struct MissingSource;

impl LineSource for MissingSource {
    fn open(&self, path: &Path) -> Result<LineStream<'_>> {
        Err(InfrastructureError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "mock missing"),
        }
        .into())
    }
}

#[derive(Default)]
pub(crate) struct RecordingDiagnostics {
    pub(crate) seen: RefCell<Vec<Diagnostic>>,
}

impl DiagnosticSink for RecordingDiagnostics {
    fn report(&self, diagnostic: &Diagnostic) -> Result<()> {
        self.seen.borrow_mut().push(diagnostic.clone());
        Ok(())
    }
}

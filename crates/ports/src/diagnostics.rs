// crates/ports/src/diagnostics.rs
use std::fmt;

use linestat_shared_kernel::{DomainError, LineNumber, RecordKind, Result};

/// What happened to a malformed record after it was reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovery {
    /// The record contributes nothing.
    Skipped,
    /// The record stays in the output with the given placeholder.
    Substituted(String),
}

/// A malformed record, reported and then recovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: LineNumber,
    pub text: String,
    pub kind: RecordKind,
    pub recovery: Recovery,
}

impl Diagnostic {
    pub fn from_error(error: DomainError, recovery: Recovery) -> Self {
        let DomainError::MalformedRecord { line, text, kind } = error;
        Self { line, text, kind, recovery }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RecordKind::Word => write!(f, "[ERROR] Line {}: invalid token '{}'.", self.line, self.text)?,
            kind => write!(f, "[ERROR] Line {}: '{}' is not a valid {kind}.", self.line, self.text)?,
        }
        match &self.recovery {
            Recovery::Skipped => f.write_str(" Skipped."),
            Recovery::Substituted(placeholder) => write!(f, " Using {placeholder} and continuing."),
        }
    }
}

/// Port receiving per-record diagnostics as they happen.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: &Diagnostic) -> Result<()>;
}

use linestat_shared_kernel::{DomainError, DomainResult, LineNumber, RecordKind};

/// Outcome of tolerantly parsing one record. Exactly one of the two cases holds.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedValue<T> {
    Valid(T),
    /// The original text that failed to parse.
    Invalid(String),
}

impl<T> ParsedValue<T> {
    /// Turns an invalid record into the malformed-record error used for diagnostics.
    pub fn into_result(self, line: LineNumber, kind: RecordKind) -> DomainResult<T> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(text) => Err(DomainError::MalformedRecord { line, text, kind }),
        }
    }
}

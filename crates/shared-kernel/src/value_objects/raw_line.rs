// crates/shared-kernel/src/value_objects/raw_line.rs
use super::LineNumber;

/// A single physical line of input, terminator stripped, tagged with its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub number: LineNumber,
    pub text: String,
}

impl RawLine {
    pub fn new(number: LineNumber, text: impl Into<String>) -> Self {
        Self { number, text: text.into() }
    }

    /// Lines made only of whitespace carry no record.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

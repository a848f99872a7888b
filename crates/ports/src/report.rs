// crates/ports/src/report.rs
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use linestat_domain::analytics::{ConversionRow, Statistics, WordEntry};
use linestat_shared_kernel::{Result, TokenCount};

/// Statistics over the accepted numbers of one file.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsSummary {
    pub file: PathBuf,
    pub elapsed: Duration,
    pub statistics: Statistics,
}

/// One conversion row per non-blank input line.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    pub file: PathBuf,
    pub elapsed: Duration,
    pub rows: Vec<ConversionRow>,
}

/// Word tally of one file, words in code-point order.
#[derive(Debug, Clone, PartialEq)]
pub struct WordCountSummary {
    pub file: PathBuf,
    pub elapsed: Duration,
    pub tokens: TokenCount,
    pub valid_words: TokenCount,
    pub words: Vec<WordEntry>,
}

/// Result of one utility run, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum RunSummary {
    Statistics(StatisticsSummary),
    Conversion(ConversionSummary),
    WordCount(WordCountSummary),
}

impl RunSummary {
    pub fn file(&self) -> &Path {
        match self {
            Self::Statistics(s) => &s.file,
            Self::Conversion(s) => &s.file,
            Self::WordCount(s) => &s.file,
        }
    }

    pub fn elapsed(&self) -> Duration {
        match self {
            Self::Statistics(s) => s.elapsed,
            Self::Conversion(s) => s.elapsed,
            Self::WordCount(s) => s.elapsed,
        }
    }
}

impl From<StatisticsSummary> for RunSummary {
    fn from(summary: StatisticsSummary) -> Self {
        Self::Statistics(summary)
    }
}

impl From<ConversionSummary> for RunSummary {
    fn from(summary: ConversionSummary) -> Self {
        Self::Conversion(summary)
    }
}

impl From<WordCountSummary> for RunSummary {
    fn from(summary: WordCountSummary) -> Self {
        Self::WordCount(summary)
    }
}

/// Final report text, written verbatim to every sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report(String);

impl Report {
    pub fn new(body: impl Into<String>) -> Self {
        Self(body.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Port turning a run summary into report text.
pub trait ReportRenderer {
    fn render(&self, summary: &RunSummary) -> Result<Report>;
}

/// Port delivering a finished report.
pub trait ReportSink {
    fn publish(&self, report: &Report) -> Result<()>;
}

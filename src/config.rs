// src/config.rs
use std::path::PathBuf;

use linestat_domain::{options::OutputFormat, radix::ConversionSettings};

pub const STATISTICS_RESULTS: &str = "StatisticsResults.txt";
pub const CONVERSION_RESULTS: &str = "ConvertionResults.txt";
pub const WORD_COUNT_RESULTS: &str = "WordCountResults.txt";

/// Which of the three utilities is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Statistics,
    Conversion,
    WordCount,
}

impl Tool {
    pub const fn program_name(self) -> &'static str {
        match self {
            Self::Statistics => "compute_statistics",
            Self::Conversion => "convert_numbers",
            Self::WordCount => "word_count",
        }
    }

    pub const fn about(self) -> &'static str {
        match self {
            Self::Statistics => "Mean, median, mode, variance and standard deviation of a file of numbers",
            Self::Conversion => "Binary and hexadecimal representations of a file of integers",
            Self::WordCount => "Word frequencies of a text file",
        }
    }

    /// Results file written into the working directory unless `--output` says otherwise.
    pub const fn default_output(self) -> &'static str {
        match self {
            Self::Statistics => STATISTICS_RESULTS,
            Self::Conversion => CONVERSION_RESULTS,
            Self::WordCount => WORD_COUNT_RESULTS,
        }
    }

    pub fn usage(self) -> String {
        format!("Usage: {} <file>", self.program_name())
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub tool: Tool,
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub conversion: ConversionSettings,
}

impl RunConfig {
    pub fn new(tool: Tool, input: impl Into<PathBuf>) -> Self {
        Self {
            tool,
            input: input.into(),
            output: PathBuf::from(tool.default_output()),
            format: OutputFormat::default(),
            conversion: ConversionSettings::default(),
        }
    }
}

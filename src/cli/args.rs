// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use super::value_enum::CliOutputFormat;

/// Arguments shared by the three utilities.
///
/// The input is optional at the clap level so a missing path can be answered
/// with the utility's own usage line and exit status 1.
#[derive(Parser, Debug)]
#[command(version, about = "Summarise a line-oriented text file")]
pub struct Args {
    /// Results file (defaults to the utility's fixed name in the current directory)
    #[arg(long, short, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = CliOutputFormat::Text)]
    pub format: CliOutputFormat,

    /// Input file, one record per line
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,
}

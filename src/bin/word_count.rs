// src/bin/word_count.rs
use std::process::ExitCode;

use linestat::{Tool, bootstrap};

fn main() -> ExitCode {
    bootstrap::main(Tool::WordCount)
}

// src/bin/compute_statistics.rs
use std::process::ExitCode;

use linestat::{Tool, bootstrap};

fn main() -> ExitCode {
    bootstrap::main(Tool::Statistics)
}

// src/bin/convert_numbers.rs
use std::process::ExitCode;

use linestat::{Tool, bootstrap};

fn main() -> ExitCode {
    bootstrap::main(Tool::Conversion)
}

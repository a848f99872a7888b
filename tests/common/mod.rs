// tests/common/mod.rs
//! Shared helpers for driving the binaries inside a scratch directory.

use std::{fs, path::Path};

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary working directory the binaries run in.
pub struct Workspace {
    dir: TempDir,
}

#[allow(dead_code)]
impl Workspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap_or_else(|e| panic!("Failed to create temp dir: {e}")) }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap_or_else(|e| panic!("Failed to write {path:?}: {e}"));
    }

    pub fn read(&self, name: &str) -> String {
        let path = self.dir.path().join(name);
        fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Command for `program` with the workspace as its current directory.
    pub fn command(&self, program: &str) -> Command {
        let mut cmd = Command::new(program);
        cmd.current_dir(self.dir.path()).env_remove("LINESTAT_LOG");
        cmd
    }
}

/// Drop the trailing elapsed-time line, which varies between runs.
#[allow(dead_code)]
pub fn without_elapsed(report: &str) -> String {
    report.lines().filter(|line| !line.starts_with("Elapsed time: ")).map(|line| format!("{line}\n")).collect()
}

pub const STATISTICS: &str = env!("CARGO_BIN_EXE_compute_statistics");
pub const CONVERSION: &str = env!("CARGO_BIN_EXE_convert_numbers");
pub const WORD_COUNT: &str = env!("CARGO_BIN_EXE_word_count");

// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod diagnostics;
pub mod output;
pub mod persistence;

pub use diagnostics::ConsoleDiagnostics;
pub use output::{ConsoleSink, FileSink, FormatRenderer};
pub use persistence::FileLineSource;

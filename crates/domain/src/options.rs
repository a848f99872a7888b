// crates/domain/src/options.rs

/// Rendering used for the report written to stdout and the results file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

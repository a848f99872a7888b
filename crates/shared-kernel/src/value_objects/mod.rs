// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod raw_line;

pub use counts::{ItemIndex, LineNumber, TokenCount};
pub use raw_line::RawLine;

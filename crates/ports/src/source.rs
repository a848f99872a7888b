// crates/ports/src/source.rs
use std::path::Path;

use linestat_shared_kernel::{RawLine, Result};

/// Lazily produced non-blank lines; numbering still counts the blank ones.
pub type LineStream<'a> = Box<dyn Iterator<Item = Result<RawLine>> + 'a>;

/// Port for reading an input file line by line.
pub trait LineSource {
    /// Opening failures surface here; read failures surface as stream items.
    fn open(&self, path: &Path) -> Result<LineStream<'_>>;
}

// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use linestat_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer targeting `path`, truncating any existing file.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<BufWriter<File>> {
        File::create(path.as_ref()).map(BufWriter::new)
    }

    /// Replace the contents of `path` with `data`; the handle is closed on return.
    pub fn overwrite<P: AsRef<Path>>(path: P, data: &[u8]) -> InfraResult<()> {
        let path = path.as_ref();
        let to_error = |source: std::io::Error| InfrastructureError::FileWrite { path: path.to_path_buf(), source };

        let mut writer = Self::create(path).map_err(to_error)?;
        writer.write_all(data).map_err(to_error)?;
        writer.flush().map_err(to_error)
    }
}

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use linestat_ports::source::{LineSource, LineStream};
use linestat_shared_kernel::{InfrastructureError, LineNumber, RawLine, Result};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        File::open(path).map(BufReader::new)
    }
}

/// Reads a UTF-8 text file lazily, dropping blank lines but keeping physical numbering.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileLineSource;

impl LineSource for FileLineSource {
    fn open(&self, path: &Path) -> Result<LineStream<'_>> {
        let reader = FileReader::open_buffered(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;

        let path = path.to_path_buf();
        let stream = reader.lines().enumerate().filter_map(move |(index, line)| match line {
            Ok(text) => {
                let raw = RawLine::new(LineNumber::from_index(index), text);
                (!raw.is_blank()).then_some(Ok(raw))
            }
            Err(source) => Some(Err(InfrastructureError::FileRead { path: path.clone(), source }.into())),
        });
        Ok(Box::new(stream))
    }
}

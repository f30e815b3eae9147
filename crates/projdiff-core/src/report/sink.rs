//! Destinations for rendered report lines.

use crate::errors::{DiffError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Accepts an ordered sequence of report lines
pub trait ReportSink {
    /// Persist `lines` in order
    ///
    /// # Errors
    ///
    /// - `Io` if the destination cannot be written
    fn write_lines(&mut self, lines: &[String]) -> Result<()>;
}

/// In-memory sink, mostly for tests and in-process callers
impl ReportSink for Vec<String> {
    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        self.extend_from_slice(lines);
        Ok(())
    }
}

/// Writes every line, newline-terminated, to a file (truncating it)
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for FileSink {
    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        let io_err = |e| DiffError::io(&self.path, e);

        let file = File::create(&self.path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        for line in lines {
            writeln!(writer, "{}", line).map_err(io_err)?;
        }
        writer.flush().map_err(io_err)
    }
}

//! File output for rendered table documents.
//!
//! One writer per output directory. Files are named after the table and
//! overwritten on every run.

use crate::{Result, adapters::OutputFormat, error::DocError};
use std::path::{Path, PathBuf};

/// Writes `<directory>/<table>.<extension>` files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentWriter {
    directory: PathBuf,
    extension: &'static str,
}

impl DocumentWriter {
    /// Creates a writer for documents of `format` under `directory`.
    pub fn new(directory: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            directory: directory.into(),
            extension: format.extension(),
        }
    }

    /// Directory receiving the documents.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Creates the output directory and any missing parents.
    ///
    /// # Errors
    /// Returns an I/O error naming the directory if it cannot be created
    pub async fn ensure_directory(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| DocError::io("create directory", &self.directory, e))
    }

    /// Destination path for `table_name`.
    ///
    /// Path separators in the name are replaced by `_`.
    pub fn path_for(&self, table_name: &str) -> PathBuf {
        let file_stem = table_name.replace(['/', '\\'], "_");
        self.directory
            .join(format!("{}.{}", file_stem, self.extension))
    }

    /// Writes `contents` for `table_name`, replacing any existing file.
    ///
    /// # Errors
    /// Returns an I/O error naming the file if the write fails
    pub async fn write(&self, table_name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.path_for(table_name);
        tokio::fs::write(&path, contents)
            .await
            .map_err(|e| DocError::io("write", &path, e))?;
        tracing::trace!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(path)
    }
}

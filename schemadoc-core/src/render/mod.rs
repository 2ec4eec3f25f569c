//! Document renderers.
//!
//! Each renderer turns one table's metadata into a complete document. They
//! hold no state and perform no I/O: the same input always yields the same
//! bytes.

mod json;
mod markdown;

pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;

use crate::{
    Result,
    adapters::OutputFormat,
    models::{ColumnInfo, TableInfo},
};

/// Renders a table descriptor and its columns into a document.
pub trait DocumentRenderer: Send + Sync {
    /// Format produced by this renderer.
    fn format(&self) -> OutputFormat;

    /// Renders the document for `table`.
    ///
    /// # Errors
    /// Returns a render or serialization error; well-formed descriptors
    /// never trigger one.
    fn render(&self, table: &TableInfo, columns: &[ColumnInfo]) -> Result<String>;
}

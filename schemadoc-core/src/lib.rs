//! Core library for schemadoc.
//!
//! Reads a schema's tables and columns from the database catalog and writes
//! one Markdown and one JSON document per table.
//!
//! # Security Guarantees
//! - No credentials stored or logged in any data structures
//! - All database operations are read-only
//! - Connection errors never include passwords
//!
//! # Architecture
//! - [`adapters::CatalogReader`] abstracts catalog access; PostgreSQL is the
//!   shipped implementation
//! - [`render`] turns a table into documents without side effects
//! - [`output::DocumentWriter`] places documents on disk
//! - [`export`] drives the pipeline table by table

#![deny(missing_docs)]

pub mod adapters;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod output;
pub mod render;
pub mod security;

// Re-export commonly used types
pub use adapters::{CatalogReader, ConnectionConfig, ExportConfig, OutputFormat, RelationStrategy};
pub use error::{DocError, Result};
pub use export::{ExportSummary, TableFailure, run_export};
pub use models::{ColumnInfo, NO_DESCRIPTION, TableInfo};
pub use render::{DocumentRenderer, JsonRenderer, MarkdownRenderer};
pub use security::Credentials;

#[cfg(feature = "postgresql")]
pub use adapters::postgres::PostgresCatalog;
#[cfg(feature = "postgresql")]
pub use export::export_schema;

//! Catalog reader trait and database-specific implementations.
//!
//! The export pipeline only ever talks to a [`CatalogReader`]; the
//! PostgreSQL reader is the one shipped implementation, and tests drive the
//! pipeline with in-memory readers.
//!
//! # Module Structure
//! - `config`: Configuration types (ConnectionConfig, ExportConfig, ...)
//! - `helpers`: Row decoding helpers shared by SQL readers
//! - `postgres`: PostgreSQL catalog reader (feature `postgresql`)

use crate::{
    Result,
    models::{ColumnInfo, TableInfo},
};
use async_trait::async_trait;

pub mod config;

pub use config::{
    ConnectionConfig, DEFAULT_PORT, ExportConfig, OutputFormat, RelationStrategy,
};

/// Read-only access to a database's catalog over one open session.
///
/// # Security Guarantees
/// - All operations are read-only
/// - Credentials are never stored or logged
///
/// Every method may fail with a catalog or connection error; callers do not
/// retry.
#[async_trait]
pub trait CatalogReader: Send {
    /// Lists the tables of `schema`, ordered by name ascending.
    ///
    /// Tables without a catalog comment carry
    /// [`NO_DESCRIPTION`](crate::models::NO_DESCRIPTION).
    async fn list_tables(&mut self, schema: &str) -> Result<Vec<TableInfo>>;

    /// Describes the columns of `schema.table` in ordinal position order.
    async fn describe_columns(&mut self, schema: &str, table: &str) -> Result<Vec<ColumnInfo>>;

    /// Ends the session. Called exactly once, on success and failure alike.
    async fn close(self) -> Result<()>;
}

// Shared helper utilities
#[cfg(feature = "postgresql")]
pub mod helpers;

// Database-specific reader modules
#[cfg(feature = "postgresql")]
pub mod postgres;

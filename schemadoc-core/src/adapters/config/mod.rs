//! Configuration types for the catalog reader and the export run.
//!
//! - `ConnectionConfig`: database session settings
//! - `ExportConfig`: target schema, output directories and error policy
//! - `OutputFormat` / `RelationStrategy`: rendering and inference options
//!
//! # Security
//! These structs do NOT store passwords; see [`crate::security::Credentials`].

mod connection;
mod export;

pub use connection::{ConnectionConfig, DEFAULT_PORT};
pub use export::{ExportConfig, OutputFormat, RelationStrategy};

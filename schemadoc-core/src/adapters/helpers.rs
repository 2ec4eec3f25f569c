//! Helper utilities for SQL catalog readers.
//!
//! Keeps row decoding and query error mapping consistent across queries.

use crate::{Result, error::DocError};
use sqlx::{Row, postgres::PgRow};

/// SQLSTATE raised when the session lacks privileges on a catalog object.
const INSUFFICIENT_PRIVILEGE: &str = "42501";

/// Extension trait for extracting typed values from catalog rows
/// with consistent error handling.
///
/// # Example
/// ```rust,ignore
/// use schemadoc_core::adapters::helpers::RowExt;
///
/// let name: String = row.get_field("column_name", Some("users"))?;
/// let max_length: Option<i32> = row.get_field("max_length", Some("users"))?;
/// ```
pub trait RowExt {
    /// Extracts a typed field from the row with proper error context.
    ///
    /// # Arguments
    /// * `field_name` - Name of the column to extract
    /// * `table_context` - Optional table name for error messages
    fn get_field<'r, T>(&'r self, field_name: &str, table_context: Option<&str>) -> Result<T>
    where
        T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>;
}

impl RowExt for PgRow {
    fn get_field<'r, T>(&'r self, field_name: &str, table_context: Option<&str>) -> Result<T>
    where
        T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
    {
        self.try_get(field_name)
            .map_err(|e| DocError::parse_field(field_name, table_context, e))
    }
}

/// Maps a failed catalog query to a [`DocError`].
///
/// Permission denials become [`DocError::InsufficientPrivileges`] naming
/// `resource`; lost connections become [`DocError::Connection`]; anything
/// else is a catalog error carrying `context`.
pub fn map_query_error(error: sqlx::Error, resource: &str, context: String) -> DocError {
    match &error {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(INSUFFICIENT_PRIVILEGE) => {
            DocError::insufficient_privileges(format!("SELECT on {}", resource))
        }
        sqlx::Error::Io(_) | sqlx::Error::PoolClosed | sqlx::Error::WorkerCrashed => {
            DocError::connection_failed(error)
        }
        _ => DocError::catalog_failed(context, error),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_map_query_error_generic_failure() {
        let error = map_query_error(
            sqlx::Error::RowNotFound,
            "information_schema.tables",
            "Failed to list tables in schema 'wallet'".to_string(),
        );
        assert!(matches!(error, DocError::Catalog { .. }));
        assert!(error.to_string().contains("schema 'wallet'"));
    }

    #[test]
    fn test_map_query_error_connection_loss() {
        let error = map_query_error(
            sqlx::Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "reset by peer",
            )),
            "information_schema.columns",
            "Failed to describe columns".to_string(),
        );
        assert!(matches!(error, DocError::Connection { .. }));
    }
}

//! PostgreSQL catalog reader over a single session.
//!
//! # Module Structure
//! - `connection`: session establishment, setup and teardown
//! - `catalog`: table listing and column description queries
//!
//! # Security Guarantees
//! - All operations are read-only (SELECT only, read-only session)
//! - Connection details are sanitized in error messages

mod catalog;
mod connection;


use super::{CatalogReader, ConnectionConfig, RelationStrategy};
use crate::{
    Result,
    models::{ColumnInfo, TableInfo},
};
use async_trait::async_trait;
use sqlx::PgConnection;

pub use catalog::{COLUMNS_BEST_EFFORT_QUERY, COLUMNS_CONSTRAINT_AWARE_QUERY, TABLES_QUERY};

/// PostgreSQL catalog reader holding exactly one database session.
pub struct PostgresCatalog {
    conn: PgConnection,
    config: ConnectionConfig,
    relation_strategy: RelationStrategy,
}

impl std::fmt::Debug for PostgresCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresCatalog")
            .field("config", &self.config)
            .field("relation_strategy", &self.relation_strategy)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CatalogReader for PostgresCatalog {
    async fn list_tables(&mut self, schema: &str) -> Result<Vec<TableInfo>> {
        catalog::list_tables(&mut self.conn, schema).await
    }

    async fn describe_columns(&mut self, schema: &str, table: &str) -> Result<Vec<ColumnInfo>> {
        catalog::describe_columns(&mut self.conn, schema, table, self.relation_strategy).await
    }

    async fn close(self) -> Result<()> {
        self.disconnect().await
    }
}

impl PostgresCatalog {
    /// Builder method to choose how column relations are inferred.
    pub fn with_relation_strategy(mut self, relation_strategy: RelationStrategy) -> Self {
        self.relation_strategy = relation_strategy;
        self
    }

    /// Relation inference currently in use.
    pub fn relation_strategy(&self) -> RelationStrategy {
        self.relation_strategy
    }

    /// Connection configuration (credentials excluded).
    pub fn connection_config(&self) -> &ConnectionConfig {
        &self.config
    }
}

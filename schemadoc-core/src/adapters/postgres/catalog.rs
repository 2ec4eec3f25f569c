//! Catalog queries against `information_schema`.
//!
//! Identifier columns are cast to `text` and lengths to `integer` so the
//! information-schema domains decode as plain Rust types.

use crate::adapters::RelationStrategy;
use crate::adapters::helpers::{RowExt, map_query_error};
use crate::models::{ColumnInfo, TableInfo};
use crate::Result;
use sqlx::PgConnection;

/// Tables of a schema with their `COMMENT ON TABLE` text, ordered by name.
pub const TABLES_QUERY: &str = r#"
    SELECT
        t.table_name::text AS table_name,
        obj_description(format('%I.%I', t.table_schema, t.table_name)::regclass, 'pg_class') AS table_description
    FROM information_schema.tables t
    WHERE t.table_schema = $1
    ORDER BY t.table_name
"#;

/// Column metadata with the relation joined on column name only.
///
/// Key usage is matched to constraint usage by constraint name, and the
/// result to the column by column name, without regard to which constraint
/// the column belongs to. A column therefore yields one row per matching
/// key constraint (its own primary key names the table itself) and may
/// yield no relation at all.
pub const COLUMNS_BEST_EFFORT_QUERY: &str = r#"
    SELECT
        c.column_name::text AS column_name,
        c.data_type::text AS data_type,
        c.is_nullable = 'YES' AS nullable,
        c.character_maximum_length::integer AS max_length,
        c.column_default::text AS column_default,
        EXISTS (
            SELECT 1
            FROM information_schema.table_constraints tc
            JOIN information_schema.key_column_usage kcu
                ON tc.constraint_name = kcu.constraint_name
            WHERE tc.table_schema = $1
            AND tc.table_name = $2
            AND tc.constraint_type = 'PRIMARY KEY'
            AND kcu.column_name = c.column_name
        ) AS is_primary_key,
        fk.referenced_table::text AS relation
    FROM information_schema.columns c
    LEFT JOIN (
        SELECT
            kcu.column_name,
            ccu.table_name AS referenced_table
        FROM information_schema.key_column_usage kcu
        JOIN information_schema.constraint_column_usage ccu
            ON kcu.constraint_name = ccu.constraint_name
        WHERE kcu.table_schema = $1
        AND kcu.table_name = $2
    ) fk ON c.column_name = fk.column_name
    WHERE c.table_schema = $1
    AND c.table_name = $2
    ORDER BY c.ordinal_position
"#;

/// Column metadata with foreign keys matched on constraint identity.
///
/// Exactly one row per column; a column taking part in several foreign
/// keys lists every referenced table, sorted and comma-separated.
pub const COLUMNS_CONSTRAINT_AWARE_QUERY: &str = r#"
    SELECT
        c.column_name::text AS column_name,
        c.data_type::text AS data_type,
        c.is_nullable = 'YES' AS nullable,
        c.character_maximum_length::integer AS max_length,
        c.column_default::text AS column_default,
        EXISTS (
            SELECT 1
            FROM information_schema.table_constraints tc
            JOIN information_schema.key_column_usage kcu
                ON tc.constraint_schema = kcu.constraint_schema
                AND tc.constraint_name = kcu.constraint_name
            WHERE tc.table_schema = $1
            AND tc.table_name = $2
            AND tc.constraint_type = 'PRIMARY KEY'
            AND kcu.column_name = c.column_name
        ) AS is_primary_key,
        fk.referenced_tables AS relation
    FROM information_schema.columns c
    LEFT JOIN (
        SELECT
            kcu.column_name,
            string_agg(DISTINCT ccu.table_name::text, ', ' ORDER BY ccu.table_name::text) AS referenced_tables
        FROM information_schema.table_constraints tc
        JOIN information_schema.key_column_usage kcu
            ON tc.constraint_schema = kcu.constraint_schema
            AND tc.constraint_name = kcu.constraint_name
        JOIN information_schema.constraint_column_usage ccu
            ON tc.constraint_schema = ccu.constraint_schema
            AND tc.constraint_name = ccu.constraint_name
        WHERE tc.constraint_type = 'FOREIGN KEY'
        AND tc.table_schema = $1
        AND tc.table_name = $2
        GROUP BY kcu.column_name
    ) fk ON c.column_name = fk.column_name
    WHERE c.table_schema = $1
    AND c.table_name = $2
    ORDER BY c.ordinal_position
"#;

/// Picks the column query for a relation strategy.
pub(crate) fn columns_query(strategy: RelationStrategy) -> &'static str {
    match strategy {
        RelationStrategy::BestEffort => COLUMNS_BEST_EFFORT_QUERY,
        RelationStrategy::ConstraintAware => COLUMNS_CONSTRAINT_AWARE_QUERY,
    }
}

pub(crate) async fn list_tables(conn: &mut PgConnection, schema: &str) -> Result<Vec<TableInfo>> {
    tracing::debug!("Listing tables in schema '{}'", schema);

    let rows = sqlx::query(TABLES_QUERY)
        .bind(schema)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            map_query_error(
                e,
                "information_schema.tables",
                format!("Failed to list tables in schema '{}'", schema),
            )
        })?;

    let mut tables = Vec::with_capacity(rows.len());
    for row in &rows {
        let name: String = row.get_field("table_name", None)?;
        let comment: Option<String> = row.get_field("table_description", Some(name.as_str()))?;
        tables.push(TableInfo::new(name, comment));
    }

    tracing::debug!("Found {} tables in schema '{}'", tables.len(), schema);
    Ok(tables)
}

pub(crate) async fn describe_columns(
    conn: &mut PgConnection,
    schema: &str,
    table: &str,
    strategy: RelationStrategy,
) -> Result<Vec<ColumnInfo>> {
    let rows = sqlx::query(columns_query(strategy))
        .bind(schema)
        .bind(table)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            map_query_error(
                e,
                "information_schema.columns",
                format!("Failed to describe columns for table '{}.{}'", schema, table),
            )
        })?;

    let mut columns = Vec::with_capacity(rows.len());
    for row in &rows {
        columns.push(ColumnInfo {
            column_name: row.get_field("column_name", Some(table))?,
            data_type: row.get_field("data_type", Some(table))?,
            nullable: row.get_field("nullable", Some(table))?,
            max_length: row.get_field("max_length", Some(table))?,
            default_expression: row.get_field("column_default", Some(table))?,
            is_primary_key: row.get_field("is_primary_key", Some(table))?,
            relation: row.get_field("relation", Some(table))?,
        });
    }

    tracing::trace!("Table '{}.{}' has {} column rows", schema, table, columns.len());
    Ok(columns)
}

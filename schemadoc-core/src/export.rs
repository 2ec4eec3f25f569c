//! Export orchestration.
//!
//! Drives a [`CatalogReader`] through every table of a schema, rendering
//! each into Markdown and JSON and writing the documents one table at a
//! time. The reader is closed whatever the outcome.

use crate::{
    Result,
    adapters::{CatalogReader, ExportConfig},
    error::DocError,
    models::TableInfo,
    output::DocumentWriter,
    render::{DocumentRenderer, JsonRenderer, MarkdownRenderer},
};
use std::path::PathBuf;

#[cfg(feature = "postgresql")]
use crate::{
    adapters::{ConnectionConfig, RelationStrategy, postgres::PostgresCatalog},
    security::Credentials,
};

/// A table that could not be exported while `continue_on_error` was set.
#[derive(Debug)]
pub struct TableFailure {
    /// Name of the table that failed
    pub table: String,
    /// Error that stopped the table's export
    pub error: DocError,
}

/// Outcome of an export run.
#[derive(Debug)]
pub struct ExportSummary {
    /// Schema that was exported
    pub schema: String,
    /// Tables whose documents were both written, in processing order
    pub tables_written: Vec<String>,
    /// Tables skipped under `continue_on_error`
    pub failures: Vec<TableFailure>,
    /// Directory holding the Markdown documents
    pub markdown_dir: PathBuf,
    /// Directory holding the JSON documents
    pub json_dir: PathBuf,
}

impl ExportSummary {
    fn new(config: &ExportConfig) -> Self {
        Self {
            schema: config.schema.clone(),
            tables_written: Vec::new(),
            failures: Vec::new(),
            markdown_dir: config.markdown_dir.clone(),
            json_dir: config.json_dir.clone(),
        }
    }

    /// True when every listed table was exported.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

struct Output {
    renderer: Box<dyn DocumentRenderer>,
    writer: DocumentWriter,
}

impl Output {
    fn new(renderer: Box<dyn DocumentRenderer>, config: &ExportConfig) -> Self {
        let format = renderer.format();
        Self {
            writer: DocumentWriter::new(config.directory_for(format), format),
            renderer,
        }
    }
}

/// Exports every table of `config.schema` read through `reader`.
///
/// Tables are processed sequentially in listing order. Unless
/// `continue_on_error` is set, the first failure skips the remaining tables
/// and is returned; files already written are kept. The reader is closed on
/// every path, and a failure to close is only logged.
///
/// # Errors
/// Returns the first configuration, catalog, rendering or I/O error
pub async fn run_export<R: CatalogReader>(mut reader: R, config: &ExportConfig) -> Result<ExportSummary> {
    let outcome = export_tables(&mut reader, config).await;

    if let Err(e) = reader.close().await {
        tracing::warn!("Failed to close database session: {}", e);
    }

    outcome
}

async fn export_tables<R: CatalogReader>(reader: &mut R, config: &ExportConfig) -> Result<ExportSummary> {
    config.validate()?;

    let outputs = [
        Output::new(Box::new(MarkdownRenderer), config),
        Output::new(Box::new(JsonRenderer), config),
    ];
    for output in &outputs {
        output.writer.ensure_directory().await?;
    }

    tracing::info!("Fetching table details...");
    let tables = reader.list_tables(&config.schema).await?;
    if tables.is_empty() {
        tracing::warn!("No tables found in schema '{}'", config.schema);
    }

    let mut summary = ExportSummary::new(config);
    for table in &tables {
        match export_table(reader, &config.schema, table, &outputs).await {
            Ok(()) => summary.tables_written.push(table.name.clone()),
            Err(e) if config.continue_on_error => {
                tracing::error!("Failed to export table {}: {}", table.name, e);
                summary.failures.push(TableFailure {
                    table: table.name.clone(),
                    error: e,
                });
            }
            Err(e) => return Err(e),
        }
    }

    tracing::debug!(
        "Exported {} of {} tables from schema '{}'",
        summary.tables_written.len(),
        tables.len(),
        config.schema
    );
    Ok(summary)
}

async fn export_table<R: CatalogReader>(
    reader: &mut R,
    schema: &str,
    table: &TableInfo,
    outputs: &[Output],
) -> Result<()> {
    tracing::info!("Fetching structure for table: {}", table.name);
    let columns = reader.describe_columns(schema, &table.name).await?;

    for output in outputs {
        tracing::info!(
            "Generating {} for table: {}",
            output.renderer.format(),
            table.name
        );
        let document = output.renderer.render(table, &columns)?;
        output.writer.write(&table.name, &document).await?;
    }

    Ok(())
}

/// Connects to PostgreSQL and exports `export.schema`.
///
/// # Errors
/// Returns a configuration or connection error before any table is read,
/// otherwise whatever [`run_export`] returns
#[cfg(feature = "postgresql")]
pub async fn export_schema(
    connection: ConnectionConfig,
    credentials: &Credentials,
    relation_strategy: RelationStrategy,
    export: &ExportConfig,
) -> Result<ExportSummary> {
    export.validate()?;

    let reader = PostgresCatalog::connect(connection, credentials)
        .await?
        .with_relation_strategy(relation_strategy);

    run_export(reader, export).await
}

//! JSON table records.

use super::DocumentRenderer;
use crate::{
    Result,
    adapters::OutputFormat,
    error::DocError,
    models::{ColumnInfo, TableInfo},
};
use serde::{Serialize, Serializer};

/// Renders `{ "name", "description", "columns" }` records, pretty-printed
/// with two-space indentation and no trailing newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct TableRecord<'a> {
    name: &'a str,
    description: &'a str,
    columns: ColumnMap<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ColumnRecord<'a> {
    #[serde(rename = "type")]
    data_type: &'a str,
    nullable: bool,
    max_length: Option<i32>,
    default: Option<&'a str>,
    pk: bool,
    relation: Option<&'a str>,
}

impl<'a> From<&'a ColumnInfo> for ColumnRecord<'a> {
    fn from(column: &'a ColumnInfo) -> Self {
        Self {
            data_type: &column.data_type,
            nullable: column.nullable,
            max_length: column.max_length,
            default: column.default_expression.as_deref(),
            pk: column.is_primary_key,
            relation: column.relation.as_deref(),
        }
    }
}

/// Column records keyed by name in first-seen order.
///
/// A repeated name replaces the earlier record but keeps its position.
struct ColumnMap<'a>(Vec<(&'a str, ColumnRecord<'a>)>);

impl<'a> ColumnMap<'a> {
    fn from_columns(columns: &'a [ColumnInfo]) -> Self {
        let mut entries: Vec<(&'a str, ColumnRecord<'a>)> = Vec::with_capacity(columns.len());
        for column in columns {
            let record = ColumnRecord::from(column);
            match entries
                .iter_mut()
                .find(|(name, _)| *name == column.column_name)
            {
                Some(entry) => entry.1 = record,
                None => entries.push((column.column_name.as_str(), record)),
            }
        }
        Self(entries)
    }
}

impl Serialize for ColumnMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, record)| (*name, record)))
    }
}

impl DocumentRenderer for JsonRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn render(&self, table: &TableInfo, columns: &[ColumnInfo]) -> Result<String> {
        let record = TableRecord {
            name: &table.name,
            description: &table.description,
            columns: ColumnMap::from_columns(columns),
        };

        serde_json::to_string_pretty(&record).map_err(|e| DocError::Serialization {
            context: format!("Failed to serialize JSON for table '{}'", table.name),
            source: e,
        })
    }
}

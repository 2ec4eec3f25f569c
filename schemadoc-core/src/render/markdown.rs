//! Markdown table documents.

use super::DocumentRenderer;
use crate::{
    Result,
    adapters::OutputFormat,
    error::DocError,
    models::{ColumnInfo, TableInfo},
};
use askama::Template;

/// Renders `templates/table.md`: title, description and one row per column.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

#[derive(Template)]
#[template(path = "table.md", escape = "none")]
struct TableTemplate<'a> {
    name: &'a str,
    description: &'a str,
    rows: Vec<ColumnRow<'a>>,
}

struct ColumnRow<'a> {
    name: &'a str,
    data_type: &'a str,
    max_length: String,
    nullable: bool,
    default: &'a str,
    primary_key: &'static str,
    relation: &'a str,
}

impl<'a> From<&'a ColumnInfo> for ColumnRow<'a> {
    fn from(column: &'a ColumnInfo) -> Self {
        Self {
            name: &column.column_name,
            data_type: &column.data_type,
            max_length: column
                .max_length
                .map_or_else(String::new, |len| len.to_string()),
            nullable: column.nullable,
            default: column.default_expression.as_deref().unwrap_or_default(),
            primary_key: if column.is_primary_key { "YES" } else { "NO" },
            relation: column.relation.as_deref().unwrap_or_default(),
        }
    }
}

impl DocumentRenderer for MarkdownRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }

    fn render(&self, table: &TableInfo, columns: &[ColumnInfo]) -> Result<String> {
        TableTemplate {
            name: &table.name,
            description: &table.description,
            rows: columns.iter().map(ColumnRow::from).collect(),
        }
        .render()
        .map_err(|e| DocError::render_failed(&table.name, e))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::NO_DESCRIPTION;

    fn users() -> (TableInfo, Vec<ColumnInfo>) {
        (
            TableInfo::new("users", Some("Registered accounts".to_string())),
            vec![
                ColumnInfo::new("id", "integer")
                    .with_nullable(false)
                    .with_default("nextval('users_id_seq'::regclass)")
                    .primary_key(),
                ColumnInfo::new("email", "character varying").with_max_length(255),
                ColumnInfo::new("wallet_id", "uuid").with_relation("wallets"),
            ],
        )
    }

    #[test]
    fn test_markdown_layout() {
        let (table, columns) = users();
        let markdown = MarkdownRenderer.render(&table, &columns).unwrap();

        let expected = "\
# Table: users

**Description**: Registered accounts

| Column Name | Data Type | Max Length | Is Nullable | Default | Primary Key | Relation |
|-------------|-----------|------------|-------------|---------|-------------|----------|
| id | integer |  | false | nextval('users_id_seq'::regclass) | YES |  |
| email | character varying | 255 | true |  | NO |  |
| wallet_id | uuid |  | true |  | NO | wallets |
";
        assert_eq!(markdown, expected);
    }

    #[test]
    fn test_markdown_without_columns_ends_after_header() {
        let table = TableInfo::new("empty", None);
        let markdown = MarkdownRenderer.render(&table, &[]).unwrap();

        assert!(markdown.starts_with("# Table: empty\n\n"));
        assert!(markdown.contains(&format!("**Description**: {}\n", NO_DESCRIPTION)));
        assert!(markdown.ends_with("|----------|\n"));
    }

    #[test]
    fn test_markdown_keeps_duplicate_rows() {
        let table = TableInfo::new("accounts", None);
        let columns = vec![
            ColumnInfo::new("id", "integer").primary_key().with_relation("accounts"),
            ColumnInfo::new("id", "integer").primary_key().with_relation("owners"),
        ];

        let markdown = MarkdownRenderer.render(&table, &columns).unwrap();

        assert!(markdown.contains("| id | integer |  | true |  | YES | accounts |\n"));
        assert!(markdown.contains("| id | integer |  | true |  | YES | owners |\n"));
    }

    #[test]
    fn test_markdown_does_not_escape_html() {
        let table = TableInfo::new("notes", Some("<b>bold</b> & co".to_string()));
        let columns = vec![ColumnInfo::new("body", "text").with_default("'<none>'::text")];

        let markdown = MarkdownRenderer.render(&table, &columns).unwrap();

        assert!(markdown.contains("**Description**: <b>bold</b> & co\n"));
        assert!(markdown.contains("'<none>'::text"));
    }
}

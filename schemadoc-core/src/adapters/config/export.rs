//! Export run configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Tabular Markdown document (`.md`)
    Markdown,
    /// Pretty-printed JSON record (`.json`)
    Json,
}

impl OutputFormat {
    /// File extension used for documents of this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

/// How a column's referenced table is inferred from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RelationStrategy {
    /// Joins key usage to constraint usage on column name only.
    ///
    /// A column may be reported once per matched constraint (including its
    /// own primary key, which then names the table itself), or not at all.
    #[default]
    BestEffort,
    /// Joins on constraint identity and considers foreign keys only; one
    /// row per column, several referenced tables comma-separated.
    ConstraintAware,
}

/// Configuration for one export run.
///
/// # Example
/// ```rust
/// use schemadoc_core::adapters::ExportConfig;
///
/// let config = ExportConfig::new("wallet")
///     .with_markdown_dir("docs/md")
///     .with_continue_on_error(true);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.json_dir.to_str(), Some("json_tables"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Schema whose tables are documented
    pub schema: String,
    /// Directory receiving `<table>.md` files
    pub markdown_dir: PathBuf,
    /// Directory receiving `<table>.json` files
    pub json_dir: PathBuf,
    /// Keep going after a table fails instead of aborting the run
    pub continue_on_error: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            schema: "public".to_string(),
            markdown_dir: PathBuf::from("markdown_tables"),
            json_dir: PathBuf::from("json_tables"),
            continue_on_error: false,
        }
    }
}

impl ExportConfig {
    /// Creates an export configuration for `schema` with default directories.
    pub fn new(schema: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            ..Default::default()
        }
    }

    /// Builder method to set the Markdown output directory.
    pub fn with_markdown_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.markdown_dir = dir.into();
        self
    }

    /// Builder method to set the JSON output directory.
    pub fn with_json_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.json_dir = dir.into();
        self
    }

    /// Builder method to isolate per-table failures.
    pub fn with_continue_on_error(mut self, continue_on_error: bool) -> Self {
        self.continue_on_error = continue_on_error;
        self
    }

    /// Output directory for the given format.
    pub fn directory_for(&self, format: OutputFormat) -> &PathBuf {
        match format {
            OutputFormat::Markdown => &self.markdown_dir,
            OutputFormat::Json => &self.json_dir,
        }
    }

    /// Validates export configuration parameters.
    ///
    /// # Errors
    /// Returns error if the schema name or an output directory is empty
    pub fn validate(&self) -> crate::Result<()> {
        if self.schema.trim().is_empty() {
            return Err(crate::error::DocError::configuration(
                "schema cannot be empty",
            ));
        }

        if self.markdown_dir.as_os_str().is_empty() || self.json_dir.as_os_str().is_empty() {
            return Err(crate::error::DocError::configuration(
                "output directories cannot be empty",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_export_config_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.schema, "public");
        assert_eq!(config.markdown_dir, PathBuf::from("markdown_tables"));
        assert_eq!(config.json_dir, PathBuf::from("json_tables"));
        assert!(!config.continue_on_error);
    }

    #[test]
    fn test_export_config_validation() {
        assert!(ExportConfig::new("wallet").validate().is_ok());
        assert!(ExportConfig::new("  ").validate().is_err());
        assert!(ExportConfig::new("wallet").with_json_dir("").validate().is_err());
    }

    #[test]
    fn test_directory_for_format() {
        let config = ExportConfig::new("wallet")
            .with_markdown_dir("out/md")
            .with_json_dir("out/json");

        assert_eq!(config.directory_for(OutputFormat::Markdown), &PathBuf::from("out/md"));
        assert_eq!(config.directory_for(OutputFormat::Json), &PathBuf::from("out/json"));
    }

    #[test]
    fn test_output_format_extension() {
        assert_eq!(OutputFormat::Markdown.extension(), "md");
        assert_eq!(OutputFormat::Json.extension(), "json");
        assert_eq!(RelationStrategy::default(), RelationStrategy::BestEffort);
    }
}

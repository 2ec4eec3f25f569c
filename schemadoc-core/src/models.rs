//! Table and column descriptors read from the database catalog.
//!
//! Descriptors are created by a catalog reader, handed to the renderers and
//! dropped once the table's documents are written.

use serde::{Deserialize, Serialize};

/// Description used when the catalog stores no comment for a table.
pub const NO_DESCRIPTION: &str = "No description available";

/// One table of the documented schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInfo {
    /// Table name, unique within the schema
    pub name: String,
    /// Catalog comment or [`NO_DESCRIPTION`]
    pub description: String,
}

impl TableInfo {
    /// Builds a table descriptor, substituting [`NO_DESCRIPTION`] when the
    /// comment is missing or empty.
    pub fn new(name: impl Into<String>, comment: Option<String>) -> Self {
        let description = comment
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());
        Self {
            name: name.into(),
            description,
        }
    }
}

/// Column metadata for one table, in ordinal position order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    /// Column name as stored in the catalog
    pub column_name: String,
    /// SQL data type name, e.g. `character varying`
    pub data_type: String,
    /// Whether the column accepts NULL
    pub nullable: bool,
    /// Character maximum length, absent for non-character types
    pub max_length: Option<i32>,
    /// Default expression text, if any
    pub default_expression: Option<String>,
    /// Whether the column belongs to the primary key
    pub is_primary_key: bool,
    /// Referenced table as inferred from key usage, if any
    pub relation: Option<String>,
}

impl ColumnInfo {
    /// Creates a nullable, non-key column with no length, default or relation.
    pub fn new(column_name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            data_type: data_type.into(),
            nullable: true,
            max_length: None,
            default_expression: None,
            is_primary_key: false,
            relation: None,
        }
    }

    /// Builder method to set nullability.
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Builder method to set the character maximum length.
    pub fn with_max_length(mut self, max_length: i32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Builder method to set the default expression.
    pub fn with_default(mut self, default_expression: impl Into<String>) -> Self {
        self.default_expression = Some(default_expression.into());
        self
    }

    /// Builder method to mark the column as part of the primary key.
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    /// Builder method to set the referenced table.
    pub fn with_relation(mut self, relation: impl Into<String>) -> Self {
        self.relation = Some(relation.into());
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_table_info_uses_comment() {
        let table = TableInfo::new("users", Some("Registered accounts".to_string()));
        assert_eq!(table.name, "users");
        assert_eq!(table.description, "Registered accounts");
    }

    #[test]
    fn test_table_info_placeholder_for_missing_comment() {
        assert_eq!(TableInfo::new("audit", None).description, NO_DESCRIPTION);
        assert_eq!(
            TableInfo::new("audit", Some(String::new())).description,
            NO_DESCRIPTION
        );
    }

    #[test]
    fn test_column_builder() {
        let column = ColumnInfo::new("id", "integer")
            .with_nullable(false)
            .with_default("nextval('users_id_seq'::regclass)")
            .primary_key();

        assert_eq!(column.column_name, "id");
        assert!(!column.nullable);
        assert!(column.is_primary_key);
        assert_eq!(column.max_length, None);
        assert_eq!(column.relation, None);
        assert_eq!(
            column.default_expression.as_deref(),
            Some("nextval('users_id_seq'::regclass)")
        );
    }
}

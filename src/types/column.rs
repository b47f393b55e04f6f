//! Column descriptors produced by schema introspection.

use serde::Serialize;

/// A table column as reported by `DESCRIBE` (simple form).
///
/// The declared type is lower-cased. `default` is `None` when the column
/// declares no default, which is distinct from an explicit empty-string
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    pub sql_type: String,
    pub nullable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// A table column as reported by `INFORMATION_SCHEMA.COLUMNS` (rich form).
///
/// Keeps the declared type in its original case and carries the free-text
/// `EXTRA` annotation (e.g. `auto_increment`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnMeta {
    pub name: String,
    pub sql_type: String,
    pub nullable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub extra: String,
}

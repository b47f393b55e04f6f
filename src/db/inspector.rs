//! Schema introspection over a live connection.

use mysql::Conn;
use mysql::prelude::Queryable;

use super::{DbError, escape_identifier};
use crate::types::{Column, ColumnMeta};

/// Read-only schema introspection operations.
///
/// The seam between the interactive workflows and the database: production
/// code talks to [`MySqlInspector`], tests substitute an in-memory fake.
/// None of the operations retry; callers decide whether a failure aborts
/// the run or is reported and skipped.
pub trait SchemaInspect {
    /// List the table names of the connected database, in catalog order.
    ///
    /// An empty result is a valid terminal state, not an error.
    fn list_tables(&mut self) -> Result<Vec<String>, DbError>;

    /// Describe a table's columns via `DESCRIBE` (simple form).
    ///
    /// One round trip; the declared type is lower-cased and an absent
    /// default maps to `None`.
    fn describe_columns(&mut self, table: &str) -> Result<Vec<Column>, DbError>;

    /// Describe a table's columns via `INFORMATION_SCHEMA` (rich form),
    /// ordered by ordinal position.
    ///
    /// Returns `Ok(None)` when the table does not exist in the current
    /// database, distinguishing that from a query failure.
    fn describe_columns_rich(&mut self, table: &str) -> Result<Option<Vec<ColumnMeta>>, DbError>;

    /// Look up the declared default of a single column.
    ///
    /// `None` when the column declares no default or does not exist.
    fn fetch_column_default(
        &mut self,
        table: &str,
        column: &str,
    ) -> Result<Option<String>, DbError>;
}

/// Live inspector owning the MySQL session for the run.
pub struct MySqlInspector {
    conn: Conn,
}

impl MySqlInspector {
    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }
}

const RICH_COLUMNS_QUERY: &str = "\
    SELECT COLUMN_NAME, COLUMN_TYPE, IS_NULLABLE, COLUMN_DEFAULT, EXTRA \
    FROM INFORMATION_SCHEMA.COLUMNS \
    WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ? \
    ORDER BY ORDINAL_POSITION";

const COLUMN_DEFAULT_QUERY: &str = "\
    SELECT COLUMN_DEFAULT \
    FROM INFORMATION_SCHEMA.COLUMNS \
    WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ? AND COLUMN_NAME = ?";

fn query_failed(e: mysql::Error) -> DbError {
    DbError::QueryFailed {
        message: e.to_string(),
    }
}

impl SchemaInspect for MySqlInspector {
    fn list_tables(&mut self) -> Result<Vec<String>, DbError> {
        self.conn.query("SHOW TABLES").map_err(query_failed)
    }

    fn describe_columns(&mut self, table: &str) -> Result<Vec<Column>, DbError> {
        let stmt = format!("DESCRIBE {}", escape_identifier(table));
        let rows: Vec<(String, String, String, String, Option<String>, String)> =
            self.conn.query(&stmt).map_err(query_failed)?;

        Ok(rows
            .into_iter()
            .map(|(name, sql_type, nullable, _key, default, _extra)| Column {
                name,
                sql_type: sql_type.to_lowercase(),
                nullable: nullable == "YES",
                default,
            })
            .collect())
    }

    fn describe_columns_rich(&mut self, table: &str) -> Result<Option<Vec<ColumnMeta>>, DbError> {
        let rows: Vec<(String, String, String, Option<String>, String)> = self
            .conn
            .exec(RICH_COLUMNS_QUERY, (table,))
            .map_err(query_failed)?;

        if rows.is_empty() {
            return Ok(None);
        }

        Ok(Some(
            rows.into_iter()
                .map(|(name, sql_type, nullable, default, extra)| ColumnMeta {
                    name,
                    sql_type,
                    nullable: nullable == "YES",
                    default,
                    extra,
                })
                .collect(),
        ))
    }

    fn fetch_column_default(
        &mut self,
        table: &str,
        column: &str,
    ) -> Result<Option<String>, DbError> {
        let row: Option<(Option<String>,)> = self
            .conn
            .exec_first(COLUMN_DEFAULT_QUERY, (table, column))
            .map_err(query_failed)?;

        Ok(row.and_then(|(default,)| default))
    }
}

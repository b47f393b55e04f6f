use std::error::Error;

use serde::Serialize;

use super::ColumnsCmd;
use crate::commands::Execute;
use crate::config::Settings;
use crate::db::{MySqlInspector, SchemaInspect, connect};
use crate::types::ColumnMeta;

/// Result of the columns command execution.
///
/// `columns` is `None` when the table does not exist in the configured
/// database; that is a rendered outcome, not an error.
#[derive(Debug, Serialize)]
pub struct ColumnsResult {
    pub table: String,
    pub columns: Option<Vec<ColumnMeta>>,
}

impl Execute for ColumnsCmd {
    type Output = ColumnsResult;

    fn execute(self, settings: &Settings) -> Result<Self::Output, Box<dyn Error>> {
        let mut inspector = MySqlInspector::new(connect(settings)?);
        let columns = inspector.describe_columns_rich(&self.table)?;
        Ok(ColumnsResult {
            table: self.table,
            columns,
        })
    }
}

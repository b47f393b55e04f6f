use std::error::Error;

use serde::Serialize;

use super::TablesCmd;
use crate::commands::Execute;
use crate::config::Settings;
use crate::db::{MySqlInspector, SchemaInspect, connect};

/// Result of the tables command execution
#[derive(Debug, Serialize)]
pub struct TablesResult {
    pub database: String,
    pub tables: Vec<String>,
}

impl Execute for TablesCmd {
    type Output = TablesResult;

    fn execute(self, settings: &Settings) -> Result<Self::Output, Box<dyn Error>> {
        let mut inspector = MySqlInspector::new(connect(settings)?);
        let tables = inspector.list_tables()?;
        Ok(TablesResult {
            database: settings.database.clone(),
            tables,
        })
    }
}

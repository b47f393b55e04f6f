use std::error::Error;
use std::io;
use std::path::PathBuf;

use serde::Serialize;

use super::CrudCmd;
use crate::commands::Execute;
use crate::config::Settings;
use crate::db::{MySqlInspector, SchemaInspect, connect};
use crate::generate::PlanGenerator;
use crate::workflow::{Prompter, run_crud};

/// Result of the crud command execution.
///
/// `table` is `None` when the catalog was empty and there was nothing to
/// scaffold.
#[derive(Debug, Serialize)]
pub struct CrudResult {
    pub table: Option<String>,
    pub written: Vec<PathBuf>,
}

impl Execute for CrudCmd {
    type Output = CrudResult;

    fn execute(self, settings: &Settings) -> Result<Self::Output, Box<dyn Error>> {
        let mut inspector = MySqlInspector::new(connect(settings)?);
        let tables = inspector.list_tables()?;
        if tables.is_empty() {
            return Ok(CrudResult {
                table: None,
                written: vec![],
            });
        }

        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        let mut generator = PlanGenerator::new();

        let outcome = run_crud(
            &mut inspector,
            &mut prompter,
            &mut generator,
            &tables,
            &settings.project_path,
        )?;

        Ok(CrudResult {
            table: Some(outcome.table),
            written: outcome.written,
        })
    }
}

use std::error::Error;
use std::io;
use std::path::PathBuf;

use serde::Serialize;

use super::MasterDetailCmd;
use crate::commands::Execute;
use crate::config::Settings;
use crate::db::{MySqlInspector, SchemaInspect, connect};
use crate::generate::PlanGenerator;
use crate::types::RelationshipMapping;
use crate::workflow::{Prompter, run_master_detail};

/// Result of the master-detail command execution.
///
/// `mapping` is `None` when the catalog was empty and the workflow never
/// started.
#[derive(Debug, Serialize)]
pub struct MasterDetailResult {
    pub mapping: Option<RelationshipMapping>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub written: Vec<PathBuf>,
}

impl Execute for MasterDetailCmd {
    type Output = MasterDetailResult;

    fn execute(self, settings: &Settings) -> Result<Self::Output, Box<dyn Error>> {
        let mut inspector = MySqlInspector::new(connect(settings)?);
        let tables = inspector.list_tables()?;
        if tables.is_empty() {
            return Ok(MasterDetailResult {
                mapping: None,
                warnings: vec![],
                written: vec![],
            });
        }

        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        let mut generator = PlanGenerator::new();

        let outcome = run_master_detail(
            &mut inspector,
            &mut prompter,
            &mut generator,
            &tables,
            &settings.project_path,
        )?;

        Ok(MasterDetailResult {
            mapping: Some(outcome.bundle.mapping),
            warnings: outcome.warnings,
            written: outcome.written,
        })
    }
}

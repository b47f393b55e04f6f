//! Interactive single-table CRUD scaffolding.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::db::SchemaInspect;
use crate::generate::{Generator, dispatch_crud};
use crate::types::Column;

use super::{Prompter, WorkflowError, list_catalog};

/// Result of a CRUD scaffolding run.
#[derive(Debug)]
pub struct CrudOutcome {
    pub table: String,
    pub columns: Vec<Column>,
    pub written: Vec<PathBuf>,
}

/// Select one table by strict 1-based index, describe it, and dispatch the
/// CRUD generation sequence. The column fetch here is mandatory: a failure
/// aborts the run.
pub fn run_crud<R: BufRead, W: Write>(
    inspector: &mut dyn SchemaInspect,
    prompter: &mut Prompter<R, W>,
    generator: &mut dyn Generator,
    tables: &[String],
    project_path: &Path,
) -> Result<CrudOutcome, WorkflowError> {
    list_catalog(prompter, tables)?;

    let idx = prompter.table_index("\nSelect table: ", tables.len())?;
    let table = tables[idx].clone();

    let columns = inspector.describe_columns(&table)?;
    let written = dispatch_crud(generator, &table, &columns, inspector, project_path)?;

    Ok(CrudOutcome {
        table,
        columns,
        written,
    })
}

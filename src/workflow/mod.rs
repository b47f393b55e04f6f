//! Interactive scaffolding workflows.
//!
//! Single-pass sequential protocols: each prompt either advances or aborts
//! the run with a reported reason. There is no re-prompting, no retry, and
//! no state machine with re-entry; the only tolerated failure is the
//! display-only column report, which degrades to a warning.

mod crud;
mod master_detail;
mod prompt;
mod validate;

pub use crud::{CrudOutcome, run_crud};
pub use master_detail::{MasterDetailOutcome, run_master_detail};
pub use prompt::Prompter;
pub use validate::validate_mapping;

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::db::{DbError, SchemaInspect};
use crate::generate::GenerateError;

/// A role field that failed to resolve against its table's columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedField {
    pub role: &'static str,
    pub table: String,
    pub field: String,
}

/// Workflow errors: operator input problems plus propagated layer failures.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("'{input}' is not a number")]
    NotANumber { input: String },

    #[error("selection {index} is out of range (1-{max})")]
    OutOfRange { index: i64, max: usize },

    #[error("{what} cannot be empty")]
    EmptyInput { what: &'static str },

    #[error("table '{table}' not found in current database")]
    TableNotFound { table: String },

    #[error("unresolved field name(s): {}", format_unresolved(.fields))]
    UnresolvedFields { fields: Vec<UnresolvedField> },

    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("prompt I/O failed: {0}")]
    Io(#[from] io::Error),
}

fn format_unresolved(fields: &[UnresolvedField]) -> String {
    fields
        .iter()
        .map(|f| format!("{} '{}' (table '{}')", f.role, f.field, f.table))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print the numbered table catalog.
pub(crate) fn list_catalog<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    tables: &[String],
) -> io::Result<()> {
    prompter.say("Available tables:")?;
    for (i, table) in tables.iter().enumerate() {
        prompter.say(&format!("{}. {}", i + 1, table))?;
    }
    Ok(())
}

/// Print a table's rich column report for operator reference.
///
/// Display-only: a describe failure or a vanished table is reported on the
/// prompt stream, recorded as a warning, and the workflow continues.
pub(crate) fn display_columns<R: BufRead, W: Write>(
    inspector: &mut dyn SchemaInspect,
    prompter: &mut Prompter<R, W>,
    table: &str,
    warnings: &mut Vec<String>,
) -> io::Result<()> {
    match inspector.describe_columns_rich(table) {
        Ok(Some(cols)) => {
            prompter.say(&format!("\nColumns of table `{}`:", table))?;
            prompter.say(&"-".repeat(80))?;
            prompter.say(&format!(
                "{:<20} {:<25} {:<6} {:<15} {}",
                "Name", "Type", "NULL", "Default", "Extra"
            ))?;
            prompter.say(&"-".repeat(80))?;
            for col in &cols {
                let nullable = if col.nullable { "YES" } else { "NO" };
                let default = col.default.as_deref().unwrap_or("NULL");
                prompter.say(&format!(
                    "{:<20} {:<25} {:<6} {:<15} {}",
                    col.name, col.sql_type, nullable, default, col.extra
                ))?;
            }
            prompter.say(&"-".repeat(80))?;
            prompter.say(&format!("Total columns: {}\n", cols.len()))?;
        }
        Ok(None) => {
            let message = format!("table '{}' not found in current database", table);
            prompter.say(&message)?;
            warnings.push(message);
        }
        Err(e) => {
            let message = format!("failed to fetch columns of '{}': {}", table, e);
            prompter.say(&message)?;
            warnings.push(message);
        }
    }
    Ok(())
}

//! Interactive master-detail relationship mapping.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::db::SchemaInspect;
use crate::generate::{Generator, dispatch_master_detail};
use crate::types::{MappingBundle, RelationshipMapping};

use super::{Prompter, WorkflowError, display_columns, list_catalog, validate_mapping};

/// Everything a master-detail run produces besides the generated files.
#[derive(Debug)]
pub struct MasterDetailOutcome {
    pub bundle: MappingBundle,
    pub written: Vec<PathBuf>,
    pub warnings: Vec<String>,
}

/// Run the master-detail mapping protocol against a non-empty catalog.
///
/// Strictly sequential: table selection, optional related table, module
/// name, mandatory column fetches, column reports interleaved with the
/// role prompts, the status-default lookup, validation, and finally the
/// generation dispatch. Any failure other than the display-only reports
/// aborts the run.
pub fn run_master_detail<R: BufRead, W: Write>(
    inspector: &mut dyn SchemaInspect,
    prompter: &mut Prompter<R, W>,
    generator: &mut dyn Generator,
    tables: &[String],
    project_path: &Path,
) -> Result<MasterDetailOutcome, WorkflowError> {
    list_catalog(prompter, tables)?;

    let master_idx = prompter.table_index("\nSelect master table: ", tables.len())?;
    let detail_idx = prompter.table_index("Select detail table: ", tables.len())?;
    let master_table = tables[master_idx].clone();
    let detail_table = tables[detail_idx].clone();

    let fk_detail_table = prompter
        .optional_table_index(
            &format!("\nTable related to `{}` (Enter to skip): ", detail_table),
            tables.len(),
        )?
        .map(|i| tables[i].clone());

    let module_name = prompter.required("module name", "Module name: ")?;

    let master_cols = inspector
        .describe_columns_rich(&master_table)?
        .ok_or_else(|| WorkflowError::TableNotFound {
            table: master_table.clone(),
        })?;
    let detail_cols = inspector
        .describe_columns_rich(&detail_table)?
        .ok_or_else(|| WorkflowError::TableNotFound {
            table: detail_table.clone(),
        })?;

    let mut warnings = Vec::new();

    display_columns(inspector, prompter, &master_table, &mut warnings)?;
    prompter.say("\nOptional master table roles:")?;
    let unique_master_field = prompter.optional(&format!(
        "Unique field in `{}` (e.g. receipt_no): ",
        master_table
    ))?;
    let status_field = prompter.optional(&format!(
        "Status field in `{}` (e.g. payment_status): ",
        master_table
    ))?;
    let master_total_field = prompter.optional(&format!(
        "Total field in `{}` (e.g. total_items): ",
        master_table
    ))?;
    let status_terminal_value =
        prompter.optional("Status value that closes a transaction (e.g. PAID): ")?;

    display_columns(inspector, prompter, &detail_table, &mut warnings)?;
    let unique_detail_field = prompter.optional(&format!(
        "Field in `{}` linking to another table (e.g. book_id): ",
        detail_table
    ))?;
    let quantity_field = prompter.optional(&format!(
        "Field in `{}` holding quantity (e.g. qty): ",
        detail_table
    ))?;
    let price_field = prompter.optional(&format!(
        "Field in `{}` holding unit price (e.g. price): ",
        detail_table
    ))?;
    let rollup_prompt = match &master_total_field {
        Some(total) => format!(
            "Field in `{}` rolled up into `{}` (e.g. subtotal): ",
            detail_table, total
        ),
        None => format!("Rollup field in `{}` (e.g. subtotal): ", detail_table),
    };
    let detail_rollup_field = prompter.optional(&rollup_prompt)?;

    let status_default = match &status_field {
        Some(field) => inspector.fetch_column_default(&master_table, field)?,
        None => None,
    };

    let mapping = RelationshipMapping {
        master_table,
        detail_table,
        fk_detail_table,
        module_name,
        unique_master_field,
        status_field,
        status_terminal_value,
        master_total_field,
        unique_detail_field,
        quantity_field,
        price_field,
        detail_rollup_field,
        status_default,
    };

    validate_mapping(&mapping, &master_cols, &detail_cols)?;

    let bundle = MappingBundle {
        mapping,
        master_cols,
        detail_cols,
    };
    let written = dispatch_master_detail(generator, &bundle, inspector, project_path)?;

    Ok(MasterDetailOutcome {
        bundle,
        written,
        warnings,
    })
}

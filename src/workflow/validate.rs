//! Cross-field validation of role assignments.

use crate::types::{ColumnMeta, RelationshipMapping};

use super::{UnresolvedField, WorkflowError};

/// Check every provided role field against the columns of its table.
///
/// All unresolved names are collected into a single error so the operator
/// sees the full list at once. `status_terminal_value` is a value, not a
/// column name, and is not checked. Absent roles pass.
pub fn validate_mapping(
    mapping: &RelationshipMapping,
    master_cols: &[ColumnMeta],
    detail_cols: &[ColumnMeta],
) -> Result<(), WorkflowError> {
    let mut fields = Vec::new();

    let mut check =
        |role: &'static str, table: &str, cols: &[ColumnMeta], value: &Option<String>| {
            if let Some(name) = value {
                if !cols.iter().any(|c| c.name == *name) {
                    fields.push(UnresolvedField {
                        role,
                        table: table.to_string(),
                        field: name.clone(),
                    });
                }
            }
        };

    let master = &mapping.master_table;
    let detail = &mapping.detail_table;

    check("unique master field", master, master_cols, &mapping.unique_master_field);
    check("status field", master, master_cols, &mapping.status_field);
    check("master total field", master, master_cols, &mapping.master_total_field);
    check("unique detail field", detail, detail_cols, &mapping.unique_detail_field);
    check("quantity field", detail, detail_cols, &mapping.quantity_field);
    check("price field", detail, detail_cols, &mapping.price_field);
    check("detail rollup field", detail, detail_cols, &mapping.detail_rollup_field);

    if fields.is_empty() {
        Ok(())
    } else {
        Err(WorkflowError::UnresolvedFields { fields })
    }
}

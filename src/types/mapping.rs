//! Relationship mapping records handed to generation backends.

use serde::Serialize;

use super::ColumnMeta;

/// Operator-declared master-detail relationship and role assignments.
///
/// Role entries are `None` when the operator left the prompt blank, never
/// an empty string. `master_table` and `detail_table` may name the same
/// table; the selection step does not reject equal indices (see DESIGN.md).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RelationshipMapping {
    pub master_table: String,
    pub detail_table: String,
    pub fk_detail_table: Option<String>,
    pub module_name: String,

    // master-side roles
    pub unique_master_field: Option<String>,
    pub status_field: Option<String>,
    pub status_terminal_value: Option<String>,
    pub master_total_field: Option<String>,

    // detail-side roles
    pub unique_detail_field: Option<String>,
    pub quantity_field: Option<String>,
    pub price_field: Option<String>,
    pub detail_rollup_field: Option<String>,

    /// Schema default of `status_field`, resolved only when that role is set.
    pub status_default: Option<String>,
}

/// A mapping plus the rich column lists it was built against.
#[derive(Debug, Clone, Serialize)]
pub struct MappingBundle {
    pub mapping: RelationshipMapping,
    pub master_cols: Vec<ColumnMeta>,
    pub detail_cols: Vec<ColumnMeta>,
}

//! Output formatting for master-detail command results.

use super::execute::MasterDetailResult;
use crate::output::Outputable;

fn role_line(label: &str, value: &Option<String>) -> String {
    format!("  {:<22} {}", label, value.as_deref().unwrap_or("-"))
}

impl Outputable for MasterDetailResult {
    fn to_table(&self) -> String {
        let Some(mapping) = &self.mapping else {
            return "No tables found.".to_string();
        };

        let mut lines = Vec::new();
        lines.push(format!(
            "Master-detail module `{}` ({} -> {}):",
            mapping.module_name, mapping.master_table, mapping.detail_table
        ));
        if let Some(fk) = &mapping.fk_detail_table {
            lines.push(format!("  related table: {}", fk));
        }

        lines.push("Master roles:".to_string());
        lines.push(role_line("unique field", &mapping.unique_master_field));
        lines.push(role_line("status field", &mapping.status_field));
        lines.push(role_line("status terminal value", &mapping.status_terminal_value));
        lines.push(role_line("status default", &mapping.status_default));
        lines.push(role_line("total field", &mapping.master_total_field));

        lines.push("Detail roles:".to_string());
        lines.push(role_line("unique field", &mapping.unique_detail_field));
        lines.push(role_line("quantity field", &mapping.quantity_field));
        lines.push(role_line("price field", &mapping.price_field));
        lines.push(role_line("rollup field", &mapping.detail_rollup_field));

        if !self.warnings.is_empty() {
            lines.push("Warnings:".to_string());
            for warning in &self.warnings {
                lines.push(format!("  {}", warning));
            }
        }

        if !self.written.is_empty() {
            lines.push("Written:".to_string());
            for path in &self.written {
                lines.push(format!("  {}", path.display()));
            }
        }

        lines.join("\n")
    }
}

//! Output formatting for columns command results.

use super::execute::ColumnsResult;
use crate::output::Outputable;

impl Outputable for ColumnsResult {
    fn to_table(&self) -> String {
        let Some(columns) = &self.columns else {
            return format!("Table '{}' not found in current database.", self.table);
        };

        let mut lines = Vec::new();
        lines.push(format!("Columns of table `{}`:", self.table));
        lines.push("-".repeat(80));
        lines.push(format!(
            "{:<20} {:<25} {:<6} {:<15} {}",
            "Name", "Type", "NULL", "Default", "Extra"
        ));
        lines.push("-".repeat(80));

        for col in columns {
            let nullable = if col.nullable { "YES" } else { "NO" };
            let default = col.default.as_deref().unwrap_or("NULL");
            lines.push(format!(
                "{:<20} {:<25} {:<6} {:<15} {}",
                col.name, col.sql_type, nullable, default, col.extra
            ));
        }

        lines.push("-".repeat(80));
        lines.push(format!("Total columns: {}", columns.len()));

        lines.join("\n")
    }
}

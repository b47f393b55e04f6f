//! Output formatting for tables command results.

use super::execute::TablesResult;
use crate::output::Outputable;

impl Outputable for TablesResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Tables in `{}`:", self.database));
        if self.tables.is_empty() {
            lines.push("  (no tables)".to_string());
        } else {
            for (i, table) in self.tables.iter().enumerate() {
                lines.push(format!("{:>3}. {}", i + 1, table));
            }
        }

        lines.join("\n")
    }
}

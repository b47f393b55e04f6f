//! Output formatting for crud command results.

use super::execute::CrudResult;
use crate::output::Outputable;

impl Outputable for CrudResult {
    fn to_table(&self) -> String {
        let Some(table) = &self.table else {
            return "No tables found.".to_string();
        };

        let mut lines = Vec::new();
        lines.push(format!("CRUD scaffold generated for `{}`:", table));
        for path in &self.written {
            lines.push(format!("  {}", path.display()));
        }
        lines.join("\n")
    }
}

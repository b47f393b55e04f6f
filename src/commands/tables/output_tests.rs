//! Output tests for tables command.

#[cfg(test)]
mod tests {
    use super::super::execute::TablesResult;
    use crate::output::{OutputFormat, Outputable};
    use rstest::rstest;

    #[rstest]
    fn test_to_table_numbers_entries_one_based() {
        let result = TablesResult {
            database: "library".to_string(),
            tables: vec!["books".to_string(), "loans".to_string()],
        };

        let table = result.to_table();
        assert!(table.contains("Tables in `library`:"));
        assert!(table.contains("1. books"));
        assert!(table.contains("2. loans"));
    }

    #[rstest]
    fn test_to_table_empty_catalog_is_not_an_error() {
        let result = TablesResult {
            database: "empty_db".to_string(),
            tables: vec![],
        };

        assert!(result.to_table().contains("(no tables)"));
    }

    #[rstest]
    fn test_json_format_round_trips() {
        let result = TablesResult {
            database: "library".to_string(),
            tables: vec!["books".to_string()],
        };

        let json: serde_json::Value =
            serde_json::from_str(&result.format(OutputFormat::Json)).unwrap();
        assert_eq!(json["database"], "library");
        assert_eq!(json["tables"][0], "books");
    }
}

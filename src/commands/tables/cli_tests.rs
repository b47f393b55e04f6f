//! CLI parsing tests for tables command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::output::OutputFormat;
    use clap::Parser;
    use rstest::rstest;

    #[rstest]
    fn test_tables_parses_without_args() {
        let args = Args::try_parse_from(["crudgen", "tables"]).unwrap();
        assert!(matches!(args.command, crate::commands::Command::Tables(_)));
    }

    #[rstest]
    fn test_tables_default_env_file() {
        let args = Args::try_parse_from(["crudgen", "tables"]).unwrap();
        assert_eq!(args.env_file, std::path::PathBuf::from("etc/.env"));
    }

    #[rstest]
    fn test_tables_with_env_file_override() {
        let args = Args::try_parse_from(["crudgen", "tables", "-e", "staging.env"]).unwrap();
        assert_eq!(args.env_file, std::path::PathBuf::from("staging.env"));
    }

    #[rstest]
    fn test_tables_with_json_format() {
        let args = Args::try_parse_from(["crudgen", "tables", "--format", "json"]).unwrap();
        assert_eq!(args.format, OutputFormat::Json);
    }
}

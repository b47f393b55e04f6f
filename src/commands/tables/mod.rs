mod cli_tests;
mod execute;
mod output;
mod output_tests;

use clap::Args;

/// List the tables of the configured database
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  crudgen tables                 # List tables using etc/.env settings
  crudgen tables -f json         # Machine-readable catalog
  crudgen -e staging.env tables  # Against another environment file")]
pub struct TablesCmd {}

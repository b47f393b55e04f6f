mod execute;
mod output;

use clap::Args;

/// Show column metadata for one table
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  crudgen columns books          # Column report for table `books`
  crudgen columns loans -f json  # Machine-readable descriptors")]
pub struct ColumnsCmd {
    /// Table to describe
    pub table: String,
}

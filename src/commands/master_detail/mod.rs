mod execute;
mod output;

use clap::Args;

/// Interactively map a master-detail relationship and scaffold pages
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  crudgen master-detail            # Map two tables, write the scaffold plan
  crudgen master-detail -f json    # Emit the resulting mapping as JSON")]
pub struct MasterDetailCmd {}

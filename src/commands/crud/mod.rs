mod execute;
mod output;

use clap::Args;

/// Interactively scaffold CRUD pages for a single table
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  crudgen crud                   # Pick a table, write the scaffold plan
  crudgen -e staging.env crud    # Against another environment file")]
pub struct CrudCmd {}

//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing in `mod.rs`
//! - The `Execute` impl and result types in `execute.rs`
//! - Output formatting in `output.rs`

mod columns;
mod crud;
mod master_detail;
mod tables;

pub use columns::ColumnsCmd;
pub use crud::CrudCmd;
pub use master_detail::MasterDetailCmd;
pub use tables::TablesCmd;

use clap::Subcommand;
use std::error::Error;

use crate::config::Settings;
use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, settings: &Settings) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the tables of the configured database
    Tables(TablesCmd),

    /// Show column metadata for one table
    Columns(ColumnsCmd),

    /// Interactively scaffold CRUD pages for a single table
    Crud(CrudCmd),

    /// Interactively map a master-detail relationship and scaffold pages
    MasterDetail(MasterDetailCmd),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, settings: &Settings, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Tables(cmd) => {
                let result = cmd.execute(settings)?;
                Ok(result.format(format))
            }
            Command::Columns(cmd) => {
                let result = cmd.execute(settings)?;
                Ok(result.format(format))
            }
            Command::Crud(cmd) => {
                let result = cmd.execute(settings)?;
                Ok(result.format(format))
            }
            Command::MasterDetail(cmd) => {
                let result = cmd.execute(settings)?;
                Ok(result.format(format))
            }
        }
    }
}

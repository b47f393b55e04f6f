//! crudgen library - MySQL CRUD scaffolding tool
//!
//! Provides schema introspection, the interactive relationship-mapping
//! workflows, and the generation dispatch infrastructure for scaffolding
//! CRUD and master-detail pages from a live MySQL schema.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod generate;
pub mod output;
pub mod types;
pub mod workflow;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod fixtures;

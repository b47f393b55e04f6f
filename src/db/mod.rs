//! MySQL connection and schema introspection.
//!
//! This module provides the database layer for the CLI tool:
//! - Connection management from typed [`Settings`](crate::config::Settings)
//! - The [`SchemaInspect`] trait, the seam between the interactive
//!   workflows and the live server (or an in-memory fake in tests)
//! - Identifier escaping for statements that cannot take placeholders

mod connection;
mod escape;
mod inspector;

pub use connection::connect;
pub use escape::escape_identifier;
pub use inspector::{MySqlInspector, SchemaInspect};

use thiserror::Error;

/// Database error types
#[derive(Error, Debug)]
pub enum DbError {
    #[error("connection to {host}:{port} failed: {message}")]
    ConnectionFailed {
        host: String,
        port: u16,
        message: String,
    },

    #[error("query failed: {message}")]
    QueryFailed { message: String },
}

//! Database connection management.

use mysql::{Conn, OptsBuilder};

use super::DbError;
use crate::config::Settings;

/// Open a single session against the configured MySQL server.
///
/// Any failure (bad credentials, unreachable host, unknown database)
/// collapses into a uniform [`DbError::ConnectionFailed`]; no retry is
/// attempted. The returned connection closes on drop, on every exit path.
pub fn connect(settings: &Settings) -> Result<Conn, DbError> {
    let opts = OptsBuilder::new()
        .ip_or_hostname(Some(settings.host.as_str()))
        .tcp_port(settings.port)
        .user(Some(settings.user.as_str()))
        .pass(Some(settings.password.as_str()))
        .db_name(Some(settings.database.as_str()));

    Conn::new(opts).map_err(|e| DbError::ConnectionFailed {
        host: settings.host.clone(),
        port: settings.port,
        message: e.to_string(),
    })
}

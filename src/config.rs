//! Environment file configuration.
//!
//! Connection settings live in a line-oriented `KEY=VALUE` file (default
//! `etc/.env`). Parsing never touches the process environment: values are
//! collected into an explicit [`Settings`] struct built once at startup and
//! passed by reference from there on.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default location of the environment file, relative to the working directory.
pub const DEFAULT_ENV_FILE: &str = "etc/.env";

/// Configuration errors, all raised before any database interaction.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing config file '{}'", .path.display())]
    MissingConfigFile { path: PathBuf },

    #[error("failed to parse '{}': {message}", .path.display())]
    Malformed { path: PathBuf, message: String },

    #[error("missing required key '{key}' in '{}'", .path.display())]
    MissingKey { key: &'static str, path: PathBuf },

    #[error("DB_PORT must be a port number, got '{value}'")]
    InvalidPort { value: String },
}

/// Typed connection and output-path settings consumed by every command.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub project_path: PathBuf,
}

impl Settings {
    /// Load settings from a `KEY=VALUE` file.
    ///
    /// The file must exist; a missing file is fatal before parsing is
    /// attempted. An explicit empty value (`KEY=`) is kept as an empty
    /// string and is distinct from a missing key.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::MissingConfigFile {
                path: path.to_path_buf(),
            });
        }

        let malformed = |message: String| ConfigError::Malformed {
            path: path.to_path_buf(),
            message,
        };

        let mut vars: BTreeMap<String, String> = BTreeMap::new();
        for item in dotenvy::from_path_iter(path).map_err(|e| malformed(e.to_string()))? {
            let (key, value) = item.map_err(|e| malformed(e.to_string()))?;
            vars.insert(key, value);
        }

        let take = |key: &'static str| {
            vars.get(key).cloned().ok_or(ConfigError::MissingKey {
                key,
                path: path.to_path_buf(),
            })
        };

        let port_raw = take("DB_PORT")?;
        let port = port_raw
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { value: port_raw })?;

        Ok(Settings {
            host: take("DB_HOST")?,
            port,
            user: take("DB_USER")?,
            password: take("DB_PASSWORD")?,
            database: take("DB_NAME")?,
            project_path: PathBuf::from(take("PROJECT_PATH")?),
        })
    }
}

//! Error types for pscan.
//!
//! Uses `thiserror` for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the host registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("host name cannot be empty")]
    EmptyHost,

    #[error("host name cannot contain line breaks or end in whitespace: {0:?}")]
    InvalidHost(String),

    #[error("host already in the list: {0}")]
    DuplicateHost(String),

    #[error("host not in the list: {0}")]
    HostNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine configuration directory")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid settings file: {0}")]
    InvalidFormat(String),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error for command execution.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Port(#[from] crate::types::PortError),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for command execution.
pub type CliResult<T> = Result<T, CliError>;

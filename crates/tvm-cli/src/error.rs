//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Unknown settings key.
    #[error("Unknown configuration key: {0}. Run `tvm config list` for the available keys.")]
    UnknownConfigKey(String),

    /// Settings value that fails validation.
    #[error("Invalid value for {key}: {value}. {reason}")]
    InvalidConfigValue {
        /// Settings key.
        key: &'static str,
        /// Rejected value.
        value: String,
        /// What the key accepts.
        reason: String,
    },

    /// No per-user configuration directory.
    #[error("Could not determine config directory; pass --config or set TVM_CONFIG")]
    NoConfigDir,

    /// Settings file that cannot be parsed.
    #[error("Malformed settings file {path}: {source}")]
    MalformedConfig {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },

    /// The implied-rate solve produced no rate.
    #[error("No implied rate found: {0}")]
    NoImpliedRate(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

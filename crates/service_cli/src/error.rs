//! CLI error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the command-line service
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] pricer_mc::ConfigError),

    #[error("Pricing failed: {0}")]
    Pricing(#[from] pricer_mc::PricingError),

    #[error("Failed to serialise output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

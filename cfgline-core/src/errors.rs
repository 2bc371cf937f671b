use std::io;

use thiserror::Error;

/// Result type used across the CfgLine core crate.
pub type Result<T> = std::result::Result<T, CfgLineError>;

/// Canonical error representation shared by the CfgLine crates.
#[derive(Debug, Error)]
pub enum CfgLineError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// Dedicated configuration error used by the configuration module.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("failed to read configuration file {path}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration file {path}: {message}")]
    Parse { path: String, message: String },
}

impl ConfigError {
    pub fn invalid(key: impl Into<String>, value: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            value: value.into(),
        }
    }
}

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::{ConfigError, Result};

/// Start symbol used when nothing else is configured.
pub const DEFAULT_START_SYMBOL: char = 'S';

/// Configuration shared by the CfgLine tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub start_symbol: char,
    pub log_level: String,
    pub skip_blank_lines: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            start_symbol: DEFAULT_START_SYMBOL,
            log_level: "warn".to_string(),
            skip_blank_lines: false,
        }
    }
}

/// On-disk representation; every key is optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    start: Option<String>,
    log: Option<String>,
    skip_blank: Option<bool>,
}

impl CoreConfig {
    /// Reads `path` when given, the process environment otherwise, and
    /// converts failures to the canonical CfgLine error type.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::from_env()?,
        };
        Ok(config)
    }

    /// Loads configuration from the process environment (`CFGLINE_*`).
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env_with_prefix("CFGLINE_")
    }

    /// Loads configuration from env vars prefixed with the provided value.
    pub fn from_env_with_prefix(prefix: &str) -> std::result::Result<Self, ConfigError> {
        let key = |suffix: &str| format!("{}{}", prefix, suffix);
        let mut config = Self::default();

        let start_key = key("START");
        if let Ok(raw) = env::var(&start_key) {
            config.start_symbol = parse_start_symbol(&start_key, &raw)?;
        }

        if let Ok(level) = env::var(key("LOG")) {
            config.log_level = level;
        }

        let blank_key = key("SKIP_BLANK");
        if let Ok(raw) = env::var(&blank_key) {
            config.skip_blank_lines = parse_bool(&blank_key, &raw)?;
        }

        Ok(config)
    }

    /// Loads configuration from a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&raw).map_err(|err| ConfigError::Parse {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        let mut config = Self::default();
        if let Some(start) = file.start {
            config.start_symbol = parse_start_symbol("start", &start)?;
        }
        if let Some(level) = file.log {
            config.log_level = level;
        }
        if let Some(skip) = file.skip_blank {
            config.skip_blank_lines = skip;
        }

        Ok(config)
    }
}

fn parse_start_symbol(key: &str, raw: &str) -> std::result::Result<char, ConfigError> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) if symbol.is_ascii_uppercase() => Ok(symbol),
        _ => Err(ConfigError::invalid(key, raw)),
    }
}

fn parse_bool(key: &str, raw: &str) -> std::result::Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(key, raw)),
    }
}

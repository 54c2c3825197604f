use std::env::{self, VarError};
use log::LevelFilter;
use miette::Diagnostic;
use thiserror::Error;

/// Environment variable holding the log filter.
pub const LOG_VAR: &str = "RANKPERM_LOG";

#[derive(Debug, Error, Diagnostic)]
#[error("invalid {var} value `{value}`")]
#[diagnostic(
    code(rankperm::config::log_level),
    help("use one of off, error, warn, info, debug, trace")
)]
pub struct ConfigError {
    var: &'static str,
    value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config { log_level: LevelFilter::Warn }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(LOG_VAR) {
            Ok(value) => Self::from_log_var(Some(&value)),
            Err(VarError::NotPresent) => Self::from_log_var(None),
            Err(VarError::NotUnicode(value)) => Err(ConfigError {
                var: LOG_VAR,
                value: value.to_string_lossy().into_owned(),
            }),
        }
    }

    /// Unset or blank keeps the default level.
    pub fn from_log_var(value: Option<&str>) -> Result<Self, ConfigError> {
        let value = match value.map(str::trim) {
            None | Some("") => return Ok(Config::default()),
            Some(value) => value,
        };
        let log_level = value.parse().map_err(|_| ConfigError {
            var: LOG_VAR,
            value: value.to_string(),
        })?;
        Ok(Config { log_level })
    }
}

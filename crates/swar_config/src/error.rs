//! Error types for configuration loading.

use std::error::Error;
use std::fmt::{Display, Formatter};

use swar_time::TimeError;

/// Errors from reading or validating configuration.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// Configuration file could not be read.
    Io(String),
    /// Configuration file is not valid TOML for this schema.
    Parse(String),
    /// A time value (e.g. default sunrise) failed to parse.
    Time(TimeError),
    /// A value parsed but is outside its allowed range.
    InvalidValue(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidValue(msg) => write!(f, "invalid value: {msg}"),
        }
    }
}

impl Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<TimeError> for ConfigError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

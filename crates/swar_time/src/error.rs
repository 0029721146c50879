//! Error types for civil date/time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing or validating civil date/time values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Text did not match the expected date/time layout.
    Parse(String),
    /// Fields are well-formed but do not name a real calendar instant.
    InvalidDate(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::InvalidDate(msg) => write!(f, "invalid date/time: {msg}"),
        }
    }
}

impl Error for TimeError {}

impl From<std::num::ParseIntError> for TimeError {
    fn from(e: std::num::ParseIntError) -> Self {
        Self::Parse(e.to_string())
    }
}

//! Error types for swar calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from swar base calculations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SwarError {
    /// An input lies outside its valid domain (e.g. tithi not in 1..=15).
    InvalidInput(&'static str),
}

impl Display for SwarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for SwarError {}

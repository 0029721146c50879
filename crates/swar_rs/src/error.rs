//! Error types for the convenience layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

use swar_base::SwarError;
use swar_time::TimeError;

/// A sunrise provider could not produce a time for the requested date.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SunriseError {
    /// No sunrise known for this date.
    Unavailable(String),
    /// The source returned an unusable time.
    Time(TimeError),
}

impl Display for SunriseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "sunrise unavailable: {msg}"),
            Self::Time(e) => write!(f, "sunrise time error: {e}"),
        }
    }
}

impl Error for SunriseError {}

impl From<TimeError> for SunriseError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

/// Errors from the convenience functions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SwarRsError {
    /// Invalid paksha/tithi input.
    Swar(SwarError),
    /// Sunrise lookup failed and no fallback was configured.
    Sunrise(SunriseError),
}

impl Display for SwarRsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Swar(e) => write!(f, "{e}"),
            Self::Sunrise(e) => write!(f, "{e}"),
        }
    }
}

impl Error for SwarRsError {}

impl From<SwarError> for SwarRsError {
    fn from(e: SwarError) -> Self {
        Self::Swar(e)
    }
}

impl From<SunriseError> for SwarRsError {
    fn from(e: SunriseError) -> Self {
        Self::Sunrise(e)
    }
}

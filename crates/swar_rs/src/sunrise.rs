//! Sunrise providers.
//!
//! The schedule only needs a sunrise instant; where it comes from is up to
//! the caller. A provider may fail (unknown date, unreachable service).
//! `FallbackSunrise` absorbs such failures and substitutes a fixed default
//! time so the schedule can always be drawn.

use std::collections::BTreeMap;

use swar_time::{CivilDate, TimeOfDay};
use tracing::{debug, warn};

use crate::error::SunriseError;

/// Source of local sunrise times.
pub trait SunriseProvider {
    /// Local sunrise time on `date`.
    fn sunrise(&self, date: CivilDate) -> Result<TimeOfDay, SunriseError>;
}

/// A single user-entered sunrise, used for every date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualSunrise(pub TimeOfDay);

impl SunriseProvider for ManualSunrise {
    fn sunrise(&self, _date: CivilDate) -> Result<TimeOfDay, SunriseError> {
        Ok(self.0)
    }
}

/// Sunrise times looked up from a per-date table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSunrise {
    table: BTreeMap<CivilDate, TimeOfDay>,
}

impl TableSunrise {
    pub fn new(table: BTreeMap<CivilDate, TimeOfDay>) -> Self {
        Self { table }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl SunriseProvider for TableSunrise {
    fn sunrise(&self, date: CivilDate) -> Result<TimeOfDay, SunriseError> {
        self.table
            .get(&date)
            .copied()
            .ok_or_else(|| SunriseError::Unavailable(format!("no entry for {date}")))
    }
}

/// Wraps a provider; on failure logs a warning and returns `default`.
#[derive(Debug, Clone)]
pub struct FallbackSunrise<P> {
    inner: P,
    default: TimeOfDay,
}

impl<P: SunriseProvider> FallbackSunrise<P> {
    pub fn new(inner: P, default: TimeOfDay) -> Self {
        Self { inner, default }
    }
}

impl<P: SunriseProvider> SunriseProvider for FallbackSunrise<P> {
    fn sunrise(&self, date: CivilDate) -> Result<TimeOfDay, SunriseError> {
        match self.inner.sunrise(date) {
            Ok(t) => {
                debug!(%date, sunrise = %t, "sunrise resolved");
                Ok(t)
            }
            Err(e) => {
                warn!(
                    %date,
                    error = %e,
                    default = %self.default,
                    "sunrise lookup failed, using default"
                );
                Ok(self.default)
            }
        }
    }
}

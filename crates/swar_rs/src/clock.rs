//! Sources of the current local instant.

use chrono::{Datelike, Local, NaiveDateTime, TimeDelta, Timelike, Utc};
use swar_time::LocalDateTime;

/// Produces "now" on the caller's civil timeline.
pub trait Clock {
    fn now(&self) -> LocalDateTime;
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> LocalDateTime {
        (**self).now()
    }
}

/// Wall clock of the machine, or UTC shifted by a fixed offset when one
/// is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SystemClock {
    utc_offset_minutes: Option<i32>,
}

impl SystemClock {
    pub fn new(utc_offset_minutes: Option<i32>) -> Self {
        Self { utc_offset_minutes }
    }

    /// Follows the machine's timezone.
    pub fn local() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> LocalDateTime {
        let naive = match self.utc_offset_minutes {
            None => Local::now().naive_local(),
            Some(offset) => Utc::now().naive_utc() + TimeDelta::minutes(offset as i64),
        };
        from_naive(&naive)
    }
}

fn from_naive(t: &NaiveDateTime) -> LocalDateTime {
    LocalDateTime::new(
        t.year(),
        t.month(),
        t.day(),
        t.hour(),
        t.minute(),
        t.second(),
    )
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub LocalDateTime);

impl Clock for FixedClock {
    fn now(&self) -> LocalDateTime {
        self.0
    }
}

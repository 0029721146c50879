//! Civil date, time-of-day and combined date/time values.
//!
//! `LocalDateTime` is the instant type used throughout the schedule. It
//! carries whole seconds only and orders chronologically. Conversion to a
//! signed second count (`to_epoch_seconds`) is what makes slot arithmetic
//! exact across midnight and month ends.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::calendar::{
    SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, civil_from_days, days_from_civil,
    days_in_month,
};
use crate::error::TimeError;

/// Calendar date without a time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Build a date, rejecting months outside 1-12 and days past month end.
    pub fn try_new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate(format!("month {month} out of range")));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate(format!(
                "day {day} out of range for {year:04}-{month:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Days since 1970-01-01.
    pub fn day_number(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// Date for a day number (days since 1970-01-01).
    pub fn from_day_number(days: i64) -> Self {
        let (year, month, day) = civil_from_days(days);
        Self { year, month, day }
    }

    /// The calendar day before this one.
    pub fn previous(&self) -> Self {
        Self::from_day_number(self.day_number() - 1)
    }

    /// Combine with a time of day.
    pub fn at(self, time: TimeOfDay) -> LocalDateTime {
        LocalDateTime::new(
            self.year,
            self.month,
            self.day,
            time.hour,
            time.minute,
            time.second,
        )
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s}")));
        }
        let year: i32 = parts[0].parse()?;
        let month: u32 = parts[1].parse()?;
        let day: u32 = parts[2].parse()?;
        Self::try_new(year, month, day)
    }
}

/// Wall-clock time of day with whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Build a time of day, rejecting fields outside 0-23 / 0-59 / 0-59.
    pub fn try_new(hour: u32, minute: u32, second: u32) -> Result<Self, TimeError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(TimeError::InvalidDate(format!(
                "time {hour:02}:{minute:02}:{second:02} out of range"
            )));
        }
        Ok(Self::new(hour, minute, second))
    }

    /// Seconds since midnight.
    pub fn seconds_of_day(&self) -> i64 {
        self.hour as i64 * SECONDS_PER_HOUR
            + self.minute as i64 * SECONDS_PER_MINUTE
            + self.second as i64
    }

    /// 12-hour clock rendering, e.g. `07:12 AM`.
    pub fn to_12h_string(&self) -> String {
        let suffix = if self.hour < 12 { "AM" } else { "PM" };
        let h = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{h:02}:{:02} {suffix}", self.minute)
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    /// Parse `HH:MM` or `HH:MM:SS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.len() != 2 && parts.len() != 3 {
            return Err(TimeError::Parse(format!("expected HH:MM[:SS], got {s}")));
        }
        let hour: u32 = parts[0].parse()?;
        let minute: u32 = parts[1].parse()?;
        let second: u32 = match parts.get(2) {
            Some(p) => p.parse()?,
            None => 0,
        };
        Self::try_new(hour, minute, second)
    }
}

/// Civil date and time in a single, caller-chosen timezone.
///
/// Field order makes the derived `Ord` chronological for valid values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl LocalDateTime {
    /// Build from trusted fields without validation. Use
    /// [`try_new`](Self::try_new) or `parse` for user input; out-of-range
    /// fields are only normalized by a round trip through epoch seconds.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Build a date/time, validating every field.
    pub fn try_new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        let date = CivilDate::try_new(year, month, day)?;
        let time = TimeOfDay::try_new(hour, minute, second)?;
        Ok(date.at(time))
    }

    /// Seconds since 1970-01-01T00:00:00 on the same civil timeline.
    pub fn to_epoch_seconds(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day) * SECONDS_PER_DAY
            + self.time().seconds_of_day()
    }

    /// Inverse of [`to_epoch_seconds`](Self::to_epoch_seconds).
    pub fn from_epoch_seconds(seconds: i64) -> Self {
        let days = seconds.div_euclid(SECONDS_PER_DAY);
        let sod = seconds.rem_euclid(SECONDS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        Self {
            year,
            month,
            day,
            hour: (sod / SECONDS_PER_HOUR) as u32,
            minute: ((sod % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u32,
            second: (sod % SECONDS_PER_MINUTE) as u32,
        }
    }

    /// This instant shifted by `seconds` (may be negative).
    pub fn add_seconds(&self, seconds: i64) -> Self {
        Self::from_epoch_seconds(self.to_epoch_seconds() + seconds)
    }

    /// Signed seconds from `earlier` to `self`.
    pub fn seconds_since(&self, earlier: &LocalDateTime) -> i64 {
        self.to_epoch_seconds() - earlier.to_epoch_seconds()
    }

    pub fn date(&self) -> CivilDate {
        CivilDate::new(self.year, self.month, self.day)
    }

    pub fn time(&self) -> TimeOfDay {
        TimeOfDay::new(self.hour, self.minute, self.second)
    }
}

impl Display for LocalDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl FromStr for LocalDateTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm[:ss]`. A space may replace the `T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (date, time) = s
            .split_once(['T', ' '])
            .ok_or_else(|| TimeError::Parse(format!("expected YYYY-MM-DDThh:mm[:ss], got {s}")))?;
        let date: CivilDate = date.parse()?;
        let time: TimeOfDay = time.parse()?;
        Ok(date.at(time))
    }
}

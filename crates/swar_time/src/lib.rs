//! Civil date/time values for the swar schedule.
//!
//! This crate provides:
//! - Proleptic Gregorian calendar ↔ day-number conversions
//! - `CivilDate`, `TimeOfDay` and `LocalDateTime` value types
//! - Integer epoch-second arithmetic on an already-localized timeline
//!
//! No timezone logic lives here. A `LocalDateTime` is whatever civil time
//! the caller says it is; two values are only comparable when the caller
//! produced both in the same zone.

pub mod calendar;
pub mod error;
pub mod local_time;

pub use calendar::{
    SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, civil_from_days, days_from_civil,
    days_in_month, is_leap_year,
};
pub use error::TimeError;
pub use local_time::{CivilDate, LocalDateTime, TimeOfDay};

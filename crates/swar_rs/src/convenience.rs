//! One-call helpers that obtain sunrise and "now" and build the schedule.

use swar_base::Paksha;
use swar_schedule::{DaySchedule, swar_for_day};
use swar_time::{CivilDate, LocalDateTime};
use tracing::debug;

use crate::clock::Clock;
use crate::error::{SunriseError, SwarRsError};
use crate::sunrise::SunriseProvider;

/// Sunrise that opens the sunrise-to-sunrise day containing `now`.
///
/// Before today's sunrise, `now` still belongs to the day that began at
/// yesterday's sunrise.
pub fn vedic_day_sunrise<P: SunriseProvider>(
    provider: &P,
    now: &LocalDateTime,
) -> Result<LocalDateTime, SunriseError> {
    let today = now.date();
    let sunrise_today = today.at(provider.sunrise(today)?);
    if *now >= sunrise_today {
        return Ok(sunrise_today);
    }
    let yesterday = today.previous();
    Ok(yesterday.at(provider.sunrise(yesterday)?))
}

/// Build the schedule for `paksha`/`tithi` and mark what is active now.
///
/// With `date` the day starts at that date's sunrise; without it, the day
/// containing the clock's current instant is used.
pub fn swar_day<P, C>(
    paksha: Paksha,
    tithi: u8,
    date: Option<CivilDate>,
    provider: &P,
    clock: &C,
) -> Result<DaySchedule, SwarRsError>
where
    P: SunriseProvider,
    C: Clock,
{
    let now = clock.now();
    let sunrise = match date {
        Some(d) => d.at(provider.sunrise(d)?),
        None => vedic_day_sunrise(provider, &now)?,
    };
    debug!(paksha = paksha.name(), tithi, %sunrise, %now, "building swar day");
    Ok(swar_for_day(paksha, tithi, sunrise, now)?)
}

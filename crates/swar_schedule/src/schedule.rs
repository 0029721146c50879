//! Swar schedule construction.
//!
//! The day runs from one sunrise for exactly 24 hours and is cut into
//! twelve two-hour windows. The swar alternates every window starting from
//! the sunrise swar. Inside the active window the tattva is found from the
//! whole minutes elapsed since the window opened, taken modulo the
//! 60-minute tattva cycle.
//!
//! All arithmetic is on integer seconds of the caller's civil timeline.

use swar_base::{
    Paksha, Phase, SwarError, TATTVA_CYCLE_MINUTES, resolve_starting_phase,
    tattva_from_cycle_minute,
};
use swar_time::{LocalDateTime, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

use crate::schedule_types::{ActiveState, DaySchedule, ScheduleSlot, TattvaInfo};

/// Swar windows per day.
pub const SLOT_COUNT: usize = 12;

/// Length of one swar window.
pub const SLOT_SECONDS: i64 = 2 * SECONDS_PER_HOUR;

/// Length of the schedule day.
pub const DAY_SECONDS: i64 = SLOT_COUNT as i64 * SLOT_SECONDS;

/// Swar of window `index` when the day opens with `start_phase`.
pub fn phase_for_slot(start_phase: Phase, index: usize) -> Phase {
    if index % 2 == 0 {
        start_phase
    } else {
        start_phase.opposite()
    }
}

/// Tattva prevailing at `now` in a window that opened at `slot_start`.
///
/// Elapsed time is truncated to whole minutes before reducing modulo 60,
/// so `slot_start + 19:59` is still Prithvi and `slot_start + 20:00` is Jal.
/// Returns `None` when `now` lies outside `[slot_start, slot_start + 2h)`.
pub fn tattva_at(slot_start: &LocalDateTime, now: &LocalDateTime) -> Option<TattvaInfo> {
    let elapsed_s = now.seconds_since(slot_start);
    if !(0..SLOT_SECONDS).contains(&elapsed_s) {
        return None;
    }
    let elapsed_min = elapsed_s / SECONDS_PER_MINUTE;
    let cycle_minute = (elapsed_min % TATTVA_CYCLE_MINUTES as i64) as u32;
    let tattva = tattva_from_cycle_minute(cycle_minute);

    let cycle_start_s = slot_start.to_epoch_seconds()
        + (elapsed_min - cycle_minute as i64) * SECONDS_PER_MINUTE;
    let start_s = cycle_start_s + tattva.offset_minutes() as i64 * SECONDS_PER_MINUTE;
    let end_s = start_s + tattva.duration_minutes() as i64 * SECONDS_PER_MINUTE;

    Some(TattvaInfo {
        tattva,
        cycle_minute,
        start: LocalDateTime::from_epoch_seconds(start_s),
        end: LocalDateTime::from_epoch_seconds(end_s),
    })
}

/// Build the twelve-window schedule starting at `sunrise` and mark what is
/// active at `now`.
///
/// `sunrise` and `now` must be expressed in the same timezone; this cannot
/// be detected from the values and is the caller's obligation. When `now`
/// falls outside `[sunrise, sunrise + 24h)` no window is active and the
/// adjacent day is not consulted.
///
/// Both inputs are normalized first, so out-of-range fields (for example
/// `hour = 25`) carry over into the next day instead of skewing the slots.
pub fn build_schedule(
    start_phase: Phase,
    sunrise: LocalDateTime,
    now: LocalDateTime,
) -> DaySchedule {
    let sunrise = LocalDateTime::from_epoch_seconds(sunrise.to_epoch_seconds());
    let now = LocalDateTime::from_epoch_seconds(now.to_epoch_seconds());

    let slots: [ScheduleSlot; SLOT_COUNT] = std::array::from_fn(|i| {
        let start = sunrise.add_seconds(i as i64 * SLOT_SECONDS);
        let mut slot = ScheduleSlot {
            index: i as u8,
            start,
            end: start.add_seconds(SLOT_SECONDS),
            phase: phase_for_slot(start_phase, i),
            is_active: false,
        };
        slot.is_active = slot.contains(&now);
        slot
    });

    let active = match slots.iter().find(|s| s.is_active) {
        Some(slot) => ActiveState {
            slot_index: Some(slot.index),
            tattva: tattva_at(&slot.start, &now),
        },
        None => ActiveState::NONE,
    };

    DaySchedule {
        start_phase,
        sunrise,
        slots,
        active,
    }
}

/// Resolve the sunrise swar from paksha and tithi, then build the schedule.
pub fn swar_for_day(
    paksha: Paksha,
    tithi: u8,
    sunrise: LocalDateTime,
    now: LocalDateTime,
) -> Result<DaySchedule, SwarError> {
    let start_phase = resolve_starting_phase(paksha, tithi)?;
    Ok(build_schedule(start_phase, sunrise, now))
}

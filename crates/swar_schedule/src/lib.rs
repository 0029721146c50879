//! Daily swar schedule: twelve alternating two-hour windows from sunrise,
//! the window active at a given instant, and the tattva active within it.
//!
//! Inputs are already-localized `LocalDateTime` values; the caller is
//! responsible for obtaining sunrise and "now" in the same timezone.

pub mod schedule;
pub mod schedule_types;

pub use schedule::{
    DAY_SECONDS, SLOT_COUNT, SLOT_SECONDS, build_schedule, phase_for_slot, swar_for_day,
    tattva_at,
};
pub use schedule_types::{ActiveState, DaySchedule, ScheduleSlot, TattvaInfo};

//! Types for swar schedule results.

use swar_base::{Phase, Tattva};
use swar_time::LocalDateTime;

use crate::schedule::SLOT_COUNT;

/// One two-hour swar window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleSlot {
    /// 0-based position from sunrise (0..11).
    pub index: u8,
    /// Start of the window (inclusive).
    pub start: LocalDateTime,
    /// End of the window (exclusive).
    pub end: LocalDateTime,
    /// Swar flowing during the window.
    pub phase: Phase,
    /// Whether the query instant falls in `[start, end)`.
    pub is_active: bool,
}

impl ScheduleSlot {
    /// Whether `t` lies in `[start, end)`.
    pub fn contains(&self, t: &LocalDateTime) -> bool {
        self.start <= *t && *t < self.end
    }
}

/// Tattva active at the query instant, with its current occurrence bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TattvaInfo {
    /// The tattva.
    pub tattva: Tattva,
    /// Whole minutes into the current 60-minute cycle (0..59).
    pub cycle_minute: u32,
    /// Start of this tattva occurrence.
    pub start: LocalDateTime,
    /// End of this tattva occurrence.
    pub end: LocalDateTime,
}

/// What is active at the query instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveState {
    /// Index of the active slot, if the instant falls within the day.
    pub slot_index: Option<u8>,
    /// Active tattva; present exactly when `slot_index` is.
    pub tattva: Option<TattvaInfo>,
}

impl ActiveState {
    /// Nothing active: the instant is outside `[sunrise, sunrise + 24h)`.
    pub const NONE: Self = Self {
        slot_index: None,
        tattva: None,
    };

    pub fn is_active(&self) -> bool {
        self.slot_index.is_some()
    }
}

/// Full schedule for one sunrise-to-sunrise day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySchedule {
    /// Swar at sunrise.
    pub start_phase: Phase,
    /// Start of the day (slot 0 start).
    pub sunrise: LocalDateTime,
    /// The twelve windows in chronological order.
    pub slots: [ScheduleSlot; SLOT_COUNT],
    /// Active slot and tattva for the query instant.
    pub active: ActiveState,
}

impl DaySchedule {
    /// The active slot, if any.
    pub fn active_slot(&self) -> Option<&ScheduleSlot> {
        self.active
            .slot_index
            .and_then(|i| self.slots.get(i as usize))
    }

    /// End of the day (slot 11 end, equal to sunrise + 24h).
    pub fn end(&self) -> LocalDateTime {
        self.slots[SLOT_COUNT - 1].end
    }
}

//! Plain-text rendering of schedules.

use std::fmt::Write;

use swar_base::{ALL_TATTVAS, Phase};
use swar_rs::Labels;
use swar_schedule::{DaySchedule, ScheduleSlot, TattvaInfo};
use unicode_width::UnicodeWidthStr;

const SLOT_COLUMN: usize = 21;
const SWAR_COLUMN: usize = 24;

/// Left-align `s` to `width` terminal columns. `{:<n}` counts chars, and
/// Gujarati vowel signs occupy no column of their own.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

fn slot_range(slot: &ScheduleSlot) -> String {
    format!(
        "{} - {}",
        slot.start.time().to_12h_string(),
        slot.end.time().to_12h_string()
    )
}

/// Header lines: title, rule, starting swar.
pub fn header(labels: &Labels, start_phase: Phase) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", labels.title);
    let _ = writeln!(out, "{}", labels.subtitle);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", labels.rule);
    let _ = writeln!(out, "{}: {}", labels.start_swar, labels.phase(start_phase));
    out
}

/// One-line description of the active tattva.
pub fn tattva_line(labels: &Labels, info: &TattvaInfo) -> String {
    format!(
        "{}: {} ({} {})",
        labels.tattva_title,
        labels.tattva(info.tattva),
        labels.ends_at,
        info.end.time().to_12h_string()
    )
}

/// Active card followed by the twelve-row table.
pub fn schedule(labels: &Labels, day: &DaySchedule) -> String {
    let mut out = header(labels, day.start_phase);
    let _ = writeln!(out);

    if let Some(slot) = day.active_slot() {
        let _ = writeln!(
            out,
            "[ {} ] {} {} {}",
            labels.phase(slot.phase),
            labels.active,
            labels.ends_at,
            slot.end.time().to_12h_string()
        );
        if let Some(info) = &day.active.tattva {
            let _ = writeln!(out, "  {}", tattva_line(labels, info));
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "{}", labels.schedule);
    let _ = writeln!(
        out,
        "{}  {}  {}",
        pad(labels.time_slot, SLOT_COLUMN),
        pad(labels.swar, SWAR_COLUMN),
        labels.status
    );
    for slot in &day.slots {
        let status = if slot.is_active { labels.active } else { "" };
        let line = format!(
            "{}  {}  {}",
            pad(&slot_range(slot), SLOT_COLUMN),
            pad(labels.phase(slot.phase), SWAR_COLUMN),
            status
        );
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

/// The tattva cycle with minute offsets.
pub fn tattva_cycle(labels: &Labels) -> String {
    let mut out = String::new();
    for t in ALL_TATTVAS {
        let start = t.offset_minutes();
        let _ = writeln!(
            out,
            "{} {:>2} min  [{:02}-{:02})",
            pad(labels.tattva(t), 18),
            t.duration_minutes(),
            start,
            start + t.duration_minutes()
        );
    }
    out
}

//! Schedule construction against hand-checked days.

use swar_base::{Paksha, Phase, Tattva, resolve_starting_phase};
use swar_schedule::{
    ActiveState, DAY_SECONDS, SLOT_COUNT, SLOT_SECONDS, build_schedule, swar_for_day, tattva_at,
};
use swar_time::LocalDateTime;

fn sunrise() -> LocalDateTime {
    LocalDateTime::new(2024, 1, 1, 7, 12, 0)
}

#[test]
fn shukla_pratipada_day() {
    let start = resolve_starting_phase(Paksha::Shukla, 1).unwrap();
    assert_eq!(start, Phase::Left);
    let s = build_schedule(start, sunrise(), sunrise());

    assert_eq!(s.slots[0].start, LocalDateTime::new(2024, 1, 1, 7, 12, 0));
    assert_eq!(s.slots[0].end, LocalDateTime::new(2024, 1, 1, 9, 12, 0));
    assert_eq!(s.slots[0].phase, Phase::Left);
    assert_eq!(s.slots[1].start, LocalDateTime::new(2024, 1, 1, 9, 12, 0));
    assert_eq!(s.slots[1].end, LocalDateTime::new(2024, 1, 1, 11, 12, 0));
    assert_eq!(s.slots[1].phase, Phase::Right);
    assert_eq!(s.slots[11].start, LocalDateTime::new(2024, 1, 2, 5, 12, 0));
    assert_eq!(s.slots[11].end, LocalDateTime::new(2024, 1, 2, 7, 12, 0));
    assert_eq!(s.slots[11].phase, Phase::Right);
}

#[test]
fn phases_strictly_alternate() {
    for start in [Phase::Left, Phase::Right] {
        let s = build_schedule(start, sunrise(), sunrise());
        assert_eq!(s.slots[0].phase, start);
        for pair in s.slots.windows(2) {
            assert_ne!(pair[0].phase, pair[1].phase);
        }
    }
}

#[test]
fn slots_tile_the_day() {
    let s = build_schedule(Phase::Right, sunrise(), sunrise());
    assert_eq!(s.slots.len(), SLOT_COUNT);
    assert_eq!(s.slots[0].start, sunrise());
    for pair in s.slots.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
    for slot in &s.slots {
        assert_eq!(slot.end.seconds_since(&slot.start), SLOT_SECONDS);
    }
    assert_eq!(s.end(), sunrise().add_seconds(DAY_SECONDS));
}

#[test]
fn identical_inputs_identical_output() {
    let now = sunrise().add_seconds(5 * 3_600 + 17 * 60 + 3);
    let a = build_schedule(Phase::Left, sunrise(), now);
    let b = build_schedule(Phase::Left, sunrise(), now);
    assert_eq!(a, b);
}

#[test]
fn now_at_sunrise() {
    let s = build_schedule(Phase::Left, sunrise(), sunrise());
    assert_eq!(s.active.slot_index, Some(0));
    assert!(s.slots[0].is_active);
    let t = s.active.tattva.unwrap();
    assert_eq!(t.cycle_minute, 0);
    assert_eq!(t.tattva, Tattva::Prithvi);
}

#[test]
fn one_second_before_next_sunrise() {
    let now = sunrise().add_seconds(DAY_SECONDS - 1);
    let s = build_schedule(Phase::Left, sunrise(), now);
    assert_eq!(s.active.slot_index, Some(11));
    assert_eq!(s.active_slot().map(|slot| slot.phase), Some(Phase::Right));
    let t = s.active.tattva.unwrap();
    assert_eq!(t.cycle_minute, 59);
    assert_eq!(t.tattva, Tattva::Akash);
}

#[test]
fn outside_the_day_nothing_active() {
    for now in [sunrise().add_seconds(-1), sunrise().add_seconds(DAY_SECONDS)] {
        let s = build_schedule(Phase::Left, sunrise(), now);
        assert_eq!(s.active, ActiveState::NONE);
        assert!(s.slots.iter().all(|slot| !slot.is_active));
    }
}

#[test]
fn exactly_one_slot_active_within_day() {
    let mut offset = 0;
    while offset < DAY_SECONDS {
        let s = build_schedule(Phase::Left, sunrise(), sunrise().add_seconds(offset));
        let active = s.slots.iter().filter(|slot| slot.is_active).count();
        assert_eq!(active, 1, "offset {offset}");
        let idx = s.active.slot_index.unwrap() as i64;
        assert_eq!(idx, offset / SLOT_SECONDS);
        assert!(s.active.tattva.is_some());
        offset += 997;
    }
}

#[test]
fn tattva_boundaries_within_slot() {
    let start = sunrise().add_seconds(3 * SLOT_SECONDS);
    let cases = [
        (19 * 60 + 59, Tattva::Prithvi),
        (20 * 60, Tattva::Jal),
        (35 * 60 + 59, Tattva::Jal),
        (36 * 60, Tattva::Agni),
        (47 * 60 + 59, Tattva::Agni),
        (48 * 60, Tattva::Vayu),
        (55 * 60 + 59, Tattva::Vayu),
        (56 * 60, Tattva::Akash),
        (59 * 60 + 59, Tattva::Akash),
    ];
    for (offset, expected) in cases {
        let now = start.add_seconds(offset);
        let s = build_schedule(Phase::Left, sunrise(), now);
        assert_eq!(s.active.slot_index, Some(3));
        assert_eq!(s.active.tattva.map(|t| t.tattva), Some(expected), "offset {offset}s");
        assert_eq!(tattva_at(&start, &now).map(|t| t.tattva), Some(expected));
    }
}

#[test]
fn second_hour_repeats_cycle() {
    let start = sunrise();
    let first = tattva_at(&start, &start.add_seconds(10 * 60)).unwrap();
    let second = tattva_at(&start, &start.add_seconds(70 * 60)).unwrap();
    assert_eq!(first.tattva, second.tattva);
    assert_eq!(first.cycle_minute, second.cycle_minute);
    assert_eq!(second.start.seconds_since(&first.start), 3_600);
}

#[test]
fn active_tattva_window_contains_now() {
    let now = sunrise().add_seconds(7 * 3_600 + 41 * 60 + 12);
    let s = build_schedule(Phase::Right, sunrise(), now);
    let t = s.active.tattva.unwrap();
    assert!(t.start <= now && now < t.end);
    assert_eq!(
        t.end.seconds_since(&t.start),
        t.tattva.duration_minutes() as i64 * 60
    );
}

#[test]
fn sunrise_day_crossing_month_end() {
    let sunrise = LocalDateTime::new(2024, 2, 29, 6, 58, 0);
    let now = LocalDateTime::new(2024, 3, 1, 2, 0, 0);
    let s = swar_for_day(Paksha::Krishna, 4, sunrise, now).unwrap();
    assert_eq!(s.start_phase, Phase::Left);
    assert_eq!(s.end(), LocalDateTime::new(2024, 3, 1, 6, 58, 0));
    // 19h02m after sunrise: slot 9, 62 minutes in → cycle minute 2
    assert_eq!(s.active.slot_index, Some(9));
    assert_eq!(s.slots[9].phase, Phase::Right);
    let t = s.active.tattva.unwrap();
    assert_eq!(t.cycle_minute, 2);
    assert_eq!(t.tattva, Tattva::Prithvi);
}

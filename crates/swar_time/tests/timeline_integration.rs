//! Integration tests for instant arithmetic on the civil timeline.

use swar_time::{CivilDate, LocalDateTime, SECONDS_PER_DAY, TimeOfDay};

#[test]
fn day_of_two_hour_steps_lands_on_next_sunrise() {
    let sunrise = CivilDate::new(2024, 2, 28).at(TimeOfDay::new(7, 12, 0));
    let mut t = sunrise;
    for _ in 0..12 {
        t = t.add_seconds(7_200);
    }
    assert_eq!(t, LocalDateTime::new(2024, 2, 29, 7, 12, 0));
    assert_eq!(t.seconds_since(&sunrise), SECONDS_PER_DAY);
}

#[test]
fn parsed_components_agree_with_constructors() {
    let date: CivilDate = "2024-03-01".parse().unwrap();
    let time: TimeOfDay = "18:45:30".parse().unwrap();
    let combined: LocalDateTime = "2024-03-01T18:45:30".parse().unwrap();
    assert_eq!(date.at(time), combined);
    assert_eq!(combined.date(), date);
    assert_eq!(combined.time(), time);
}

#[test]
fn day_numbers_are_consecutive_over_month_end() {
    let jan31 = CivilDate::new(2024, 1, 31);
    let feb1 = CivilDate::new(2024, 2, 1);
    assert_eq!(feb1.day_number() - jan31.day_number(), 1);
}

#[test]
fn previous_day_over_year_boundary() {
    let d = CivilDate::new(2024, 1, 1);
    assert_eq!(d.previous(), CivilDate::new(2023, 12, 31));
    assert_eq!(CivilDate::from_day_number(d.day_number()), d);
}

//! End-to-end: sunrise provider + clock + schedule.

use std::collections::BTreeMap;

use swar_rs::{
    CivilDate, FallbackSunrise, FixedClock, LocalDateTime, ManualSunrise, Paksha, Phase,
    SunriseError, SunriseProvider, SwarRsError, TableSunrise, Tattva, TimeOfDay, swar_day,
    vedic_day_sunrise,
};

struct Offline;

impl SunriseProvider for Offline {
    fn sunrise(&self, _date: CivilDate) -> Result<TimeOfDay, SunriseError> {
        Err(SunriseError::Unavailable("network down".into()))
    }
}

fn default_fallback() -> FallbackSunrise<Offline> {
    FallbackSunrise::new(Offline, TimeOfDay::new(7, 12, 0))
}

#[test]
fn explicit_date_uses_that_sunrise() {
    let clock = FixedClock(LocalDateTime::new(2024, 1, 1, 9, 30, 0));
    let day = swar_day(
        Paksha::Shukla,
        1,
        Some(CivilDate::new(2024, 1, 1)),
        &default_fallback(),
        &clock,
    )
    .unwrap();
    assert_eq!(day.sunrise, LocalDateTime::new(2024, 1, 1, 7, 12, 0));
    assert_eq!(day.start_phase, Phase::Left);
    assert_eq!(day.active.slot_index, Some(1));
    let t = day.active.tattva.unwrap();
    assert_eq!(t.cycle_minute, 18);
    assert_eq!(t.tattva, Tattva::Prithvi);
}

#[test]
fn before_sunrise_belongs_to_previous_day() {
    let now = LocalDateTime::new(2024, 3, 1, 5, 0, 0);
    let sunrise = vedic_day_sunrise(&default_fallback(), &now).unwrap();
    assert_eq!(sunrise, LocalDateTime::new(2024, 2, 29, 7, 12, 0));

    let day = swar_day(Paksha::Krishna, 8, None, &default_fallback(), &FixedClock(now)).unwrap();
    assert_eq!(day.sunrise, sunrise);
    assert_eq!(day.start_phase, Phase::Right);
    // 21h48m after sunrise → slot 10, 108 minutes in → cycle minute 48
    assert_eq!(day.active.slot_index, Some(10));
    assert_eq!(day.active_slot().map(|s| s.phase), Some(Phase::Right));
    assert_eq!(day.active.tattva.map(|t| t.tattva), Some(Tattva::Vayu));
}

#[test]
fn explicit_date_outside_now_has_nothing_active() {
    let clock = FixedClock(LocalDateTime::new(2024, 1, 1, 5, 0, 0));
    let provider = ManualSunrise(TimeOfDay::new(6, 40, 0));
    let day = swar_day(
        Paksha::Shukla,
        5,
        Some(CivilDate::new(2024, 1, 1)),
        &provider,
        &clock,
    )
    .unwrap();
    assert!(!day.active.is_active());
    assert!(day.active.tattva.is_none());
}

#[test]
fn table_sunrise_preferred_over_default() {
    let mut table = BTreeMap::new();
    table.insert(CivilDate::new(2024, 6, 21), TimeOfDay::new(5, 58, 0));
    let provider = FallbackSunrise::new(TableSunrise::new(table), TimeOfDay::new(7, 12, 0));
    let clock = FixedClock(LocalDateTime::new(2024, 6, 21, 6, 0, 0));
    let day = swar_day(Paksha::Shukla, 10, None, &provider, &clock).unwrap();
    assert_eq!(day.sunrise, LocalDateTime::new(2024, 6, 21, 5, 58, 0));
    assert_eq!(day.active.slot_index, Some(0));
    assert_eq!(day.active_slot().map(|s| s.phase), Some(Phase::Right));
}

#[test]
fn invalid_tithi_surfaces() {
    let clock = FixedClock(LocalDateTime::new(2024, 1, 1, 9, 0, 0));
    let err = swar_day(Paksha::Shukla, 0, None, &default_fallback(), &clock).unwrap_err();
    assert!(matches!(err, SwarRsError::Swar(_)));
}

#[test]
fn unwrapped_provider_error_surfaces() {
    let clock = FixedClock(LocalDateTime::new(2024, 1, 1, 9, 0, 0));
    let err = swar_day(Paksha::Shukla, 1, None, &Offline, &clock).unwrap_err();
    assert!(matches!(err, SwarRsError::Sunrise(SunriseError::Unavailable(_))));
}

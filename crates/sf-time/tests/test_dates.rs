//! Integration tests for `Date`, `WeekdaySet`, `PreferredCalendar` and
//! `WorkCalendar`.

use proptest::prelude::*;

use sf_time::date::{days_in_month, is_leap_year};
use sf_time::{Date, Month, PreferredCalendar, TimeUnit, Weekday, WeekdaySet, WorkCalendar};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Serial arithmetic ────────────────────────────────────────────────────────

#[test]
fn consecutive_dates() {
    let mut previous = Date::MIN;
    let mut serial = Date::MIN.serial() + 1;
    while serial <= Date::MAX.serial() {
        let d = Date::from_serial(serial).unwrap();
        assert_eq!(d - previous, 1);

        let (y, m, dd) = (d.year(), d.month(), d.day_of_month());
        assert_eq!(Date::from_ymd(y, m, dd).unwrap(), d, "ymd round trip for {d}");
        assert!(dd >= 1 && dd <= days_in_month(y, m));

        let expected = Weekday::from_ordinal((previous.weekday().ordinal() + 1) % 7).unwrap();
        assert_eq!(d.weekday(), expected, "weekday sequence broken at {d}");

        previous = d;
        serial += 1;
    }
}

#[test]
fn known_weekdays() {
    assert_eq!(date(1900, 1, 1).weekday(), Weekday::Monday);
    assert_eq!(date(2024, 7, 4).weekday(), Weekday::Thursday);
    assert_eq!(date(2024, 7, 6).weekday(), Weekday::Saturday);
    assert_eq!(date(2024, 7, 7).weekday(), Weekday::Sunday);
    assert_eq!(date(2000, 2, 29).weekday(), Weekday::Tuesday);
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 2), 28);
}

#[test]
fn out_of_range_arithmetic_is_an_error() {
    assert!(Date::MAX.next_day().is_err());
    assert!(Date::MIN.previous_day().is_err());
    assert!(date(2199, 12, 15).first_of_next_month().is_err());
}

#[test]
fn month_rollover() {
    assert_eq!(date(2024, 7, 17).first_of_next_month().unwrap(), date(2024, 8, 1));
    assert_eq!(date(2024, 12, 31).first_of_next_month().unwrap(), date(2025, 1, 1));
    assert_eq!(date(2024, 1, 31).advance(1, TimeUnit::Months).unwrap(), date(2024, 2, 29));
    assert_eq!(date(2024, 2, 29).advance(1, TimeUnit::Years).unwrap(), date(2025, 2, 28));
    assert_eq!(date(2024, 3, 31).end_of_month(), date(2024, 3, 31));
}

// ─── Parsing ──────────────────────────────────────────────────────────────────

#[test]
fn parse_accepts_iso_and_slash_forms() {
    assert_eq!(Date::parse("2024-07-08").unwrap(), date(2024, 7, 8));
    assert_eq!(Date::parse("2024-07-08T13:45:00").unwrap(), date(2024, 7, 8));
    assert_eq!(Date::parse("08/07/2024").unwrap(), date(2024, 7, 8));
    assert_eq!("2024-07-08".parse::<Date>().unwrap(), date(2024, 7, 8));
}

#[test]
fn parse_rejects_garbage() {
    for s in ["", "yesterday", "2024-13-01", "2024-02-30", "24-07-08"] {
        assert!(Date::parse(s).is_err(), "{s:?} should not parse");
    }
}

#[test]
fn unix_timestamps_truncate_to_midnight() {
    let d = date(2024, 7, 8);
    assert_eq!(d.unix_timestamp(), 1_720_396_800);
    assert_eq!(Date::from_unix_timestamp(1_720_396_800 + 3_600 * 23).unwrap(), d);
    assert_eq!(Date::from_unix_timestamp(0).unwrap(), date(1970, 1, 1));
}

// ─── Calendar spans ───────────────────────────────────────────────────────────

#[test]
fn calendar_span_components() {
    let span = date(2020, 2, 15).calendar_span(date(2021, 4, 10));
    assert_eq!((span.years, span.months, span.days), (1, 1, 26));
    assert_eq!(span.total_months(), 13);
    assert!(!span.inverted);

    let back = date(2020, 2, 15).calendar_span(date(2019, 1, 16));
    assert!(back.inverted);
    assert_eq!(back.total_days, 395);
}

// ─── Serialization ────────────────────────────────────────────────────────────

#[test]
fn serde_representations() {
    let d = date(2024, 7, 8);
    assert_eq!(serde_json::to_string(&d).unwrap(), "\"2024-07-08\"");
    assert_eq!(serde_json::from_str::<Date>("\"2024-07-08\"").unwrap(), d);

    let days = WeekdaySet::MONDAY_WEDNESDAY_FRIDAY;
    let json = serde_json::to_string(&days).unwrap();
    assert_eq!(json, "[\"Monday\",\"Wednesday\",\"Friday\"]");
    assert_eq!(serde_json::from_str::<WeekdaySet>(&json).unwrap(), days);

    let cal = PreferredCalendar::new().with_days(Month::July, &[15, 7]).unwrap();
    let json = serde_json::to_string(&cal).unwrap();
    assert_eq!(json, "{\"7\":[7,15]}");
    assert_eq!(serde_json::from_str::<PreferredCalendar>(&json).unwrap(), cal);
    assert!(serde_json::from_str::<PreferredCalendar>("{\"7\":[40]}").is_err());
}

// ─── Calendars ────────────────────────────────────────────────────────────────

#[test]
fn work_calendar_over_a_month() {
    let mut cal = WorkCalendar::new(WeekdaySet::MONDAY_TO_FRIDAY);
    cal.exclude(date(2024, 7, 4));

    let mut business_days = 0;
    let mut d = date(2024, 7, 1);
    while d.month() == 7 {
        if cal.is_business_day(d) {
            business_days += 1;
        }
        d = d.next_day().unwrap();
    }
    assert_eq!(business_days, 22);
}

#[test]
fn preferred_calendar_across_months() {
    let cal = PreferredCalendar::every_month(&[5, 15, 25]).unwrap();
    let hits: Vec<Date> = (0..62)
        .map(|n| date(2024, 7, 1).add_days(n).unwrap())
        .filter(|d| cal.contains(*d))
        .collect();
    assert_eq!(
        hits,
        vec![
            date(2024, 7, 5),
            date(2024, 7, 15),
            date(2024, 7, 25),
            date(2024, 8, 5),
            date(2024, 8, 15),
            date(2024, 8, 25),
        ]
    );
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn iso_string_round_trips(serial in 1i32..=109_573) {
        let d = Date::from_serial(serial).unwrap();
        prop_assert_eq!(Date::parse_iso(&d.to_iso_string()).unwrap(), d);
    }

    #[test]
    fn month_advance_stays_in_target_month(serial in 1i32..=100_000, n in -24i32..=24) {
        let d = Date::from_serial(serial).unwrap();
        if let Ok(moved) = d.advance(n, TimeUnit::Months) {
            let before = d.year() as i32 * 12 + d.month() as i32;
            let after = moved.year() as i32 * 12 + moved.month() as i32;
            prop_assert_eq!(after - before, n);
            prop_assert!(moved.day_of_month() <= d.day_of_month());
        }
    }

    #[test]
    fn weekday_set_membership(mask in 0u8..128, serial in 1i32..=109_573) {
        let days: WeekdaySet = Weekday::ALL
            .into_iter()
            .filter(|w| mask & (1 << w.ordinal()) != 0)
            .collect();
        let d = Date::from_serial(serial).unwrap();
        prop_assert_eq!(days.contains(d.weekday()), mask & (1 << d.weekday().ordinal()) != 0);
    }
}

//! Helpers shared by the integration tests.

#![allow(dead_code)]

use sf_finder::{Finder, ScheduleAlgorithm};
use sf_time::{Date, PreferredCalendar, WeekdaySet};
use tracing_subscriber::{fmt, EnvFilter};

/// Route `tracing` output to the test harness.  Safe to call repeatedly.
pub fn init_tracing() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

/// Parse an ISO date, panicking on bad test input.
pub fn d(s: &str) -> Date {
    Date::parse_iso(s).unwrap()
}

/// Build a finder from compact test arguments.
pub fn finder(
    standard: WeekdaySet,
    preferred: Option<WeekdaySet>,
    calendar_days: Option<&[u8]>,
    excluded: &[&str],
    algorithm: ScheduleAlgorithm,
) -> Finder {
    init_tracing();
    Finder::new(
        standard,
        preferred,
        calendar_days.map(|days| PreferredCalendar::every_month(days).unwrap()),
        Some(excluded.iter().map(|s| d(s)).collect()),
        algorithm,
    )
    .unwrap()
}

/// Assert `next(from)` for every date from `first` to `last` inclusive.
pub fn assert_next_range(finder: &Finder, first: &str, last: &str, expected: &str) {
    assert_next_range_from(finder, first, last, None, expected);
}

/// [`assert_next_range`] with an explicit earliest date.
pub fn assert_next_range_from(
    finder: &Finder,
    first: &str,
    last: &str,
    earliest: Option<&str>,
    expected: &str,
) {
    let earliest = earliest.map(d);
    let mut from = d(first);
    while from <= d(last) {
        assert_eq!(
            finder.next(from, earliest, None).unwrap(),
            Some(d(expected)),
            "next({from}, earliest {earliest:?})"
        );
        from = from.next_day().unwrap();
    }
}

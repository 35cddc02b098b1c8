//! Property tests for search invariants.

use proptest::prelude::*;

use sf_finder::{Finder, ScheduleAlgorithm};
use sf_time::{Date, PreferredCalendar, Weekday, WeekdaySet};

fn weekday_set() -> impl Strategy<Value = WeekdaySet> {
    (1u8..128).prop_map(|mask| {
        Weekday::ALL
            .into_iter()
            .filter(|w| mask & (1 << w.ordinal()) != 0)
            .collect()
    })
}

fn any_date() -> impl Strategy<Value = Date> {
    (0i32..9_000).prop_map(|n| Date::from_ymd(2000, 1, 1).unwrap().add_days(n).unwrap())
}

fn algorithm() -> impl Strategy<Value = ScheduleAlgorithm> {
    prop::sample::select(ScheduleAlgorithm::ALL.to_vec())
}

/// A finder with random preferences plus a reference date with a handful of
/// exclusions close to it.
fn scenario() -> impl Strategy<Value = (Finder, Date)> {
    (
        weekday_set(),
        prop::option::of(weekday_set()),
        prop::option::of(prop::collection::vec(1u8..=28, 1..4)),
        prop::collection::vec(0i32..30, 0..6),
        algorithm(),
        any_date(),
    )
        .prop_map(|(standard, preferred, days, offsets, algorithm, from)| {
            let calendar = days.map(|days| PreferredCalendar::every_month(&days).unwrap());
            let excluded = offsets.into_iter().map(|o| from.add_days(o).unwrap()).collect();
            let finder = Finder::new(standard, preferred, calendar, Some(excluded), algorithm).unwrap();
            (finder, from)
        })
}

/// Like [`scenario`] but with no preferred workdays or calendar.
fn plain_scenario() -> impl Strategy<Value = (Finder, Date)> {
    (weekday_set(), prop::collection::vec(0i32..30, 0..6), algorithm(), any_date()).prop_map(
        |(standard, offsets, algorithm, from)| {
            let excluded = offsets.into_iter().map(|o| from.add_days(o).unwrap()).collect();
            let finder = Finder::new(standard, None, None, Some(excluded), algorithm).unwrap();
            (finder, from)
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn next_is_always_available((finder, from) in scenario()) {
        let found = finder.next(from, None, None).unwrap().unwrap();
        prop_assert!(finder.is_available(found), "{found} is not available");
        prop_assert!(!finder.excluded_dates().contains(&found));
    }

    #[test]
    fn qualifying_date_is_its_own_next((finder, from) in scenario()) {
        if finder.is_available(from) && finder.is_preferred_date(from) {
            prop_assert_eq!(finder.next(from, None, None).unwrap(), Some(from));
        }
    }

    #[test]
    fn next_never_precedes_reference((finder, from) in scenario()) {
        let found = finder.next(from, None, None).unwrap().unwrap();
        prop_assert!(found >= from, "{} went back to {found}", finder.algorithm());
    }

    #[test]
    fn next_never_precedes_earliest((finder, from) in scenario(), back in 0i32..20) {
        let earliest = from.add_days(-back).unwrap();
        let found = finder.next(from, Some(earliest), None).unwrap().unwrap();
        prop_assert!(found >= earliest);
        if finder.algorithm().is_forward_only() {
            prop_assert!(found >= from);
        }
    }

    #[test]
    fn next_is_idempotent_without_preferences((finder, from) in plain_scenario()) {
        let first = finder.next(from, None, None).unwrap().unwrap();
        prop_assert_eq!(finder.next(first, None, None).unwrap(), Some(first));
    }

    #[test]
    fn closest_is_available_and_bounded((finder, from) in scenario(), back in 0i32..20) {
        let earliest = from.add_days(-back).unwrap();
        let found = finder.closest(from, Some(earliest), None).unwrap().unwrap();
        prop_assert!(finder.is_available(found));
        prop_assert!(found >= earliest);
    }

    #[test]
    fn latest_bound_only_filters((finder, from) in scenario(), ahead in 0i32..60) {
        let latest = from.add_days(ahead).unwrap();
        let unbounded = finder.next(from, None, None).unwrap();
        let bounded = finder.next(from, None, Some(latest)).unwrap();
        prop_assert_eq!(bounded, unbounded.filter(|d| *d <= latest));
    }
}

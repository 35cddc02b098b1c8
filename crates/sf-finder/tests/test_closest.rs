//! Tests for `Finder::closest` and `Finder::find_closest_preferred_date`.

mod common;

use common::{d, finder};
use sf_finder::ScheduleAlgorithm;
use sf_time::{Weekday, WeekdaySet};

fn mid_month() -> sf_finder::Finder {
    finder(
        WeekdaySet::MONDAY_TO_FRIDAY,
        Some(WeekdaySet::MONDAY_WEDNESDAY_FRIDAY),
        Some(&[15]),
        &[],
        ScheduleAlgorithm::default(),
    )
}

// ─── find_closest_preferred_date ─────────────────────────────────────────────

#[test]
fn preferred_date_is_returned_unchanged() {
    let f = mid_month();
    assert_eq!(f.find_closest_preferred_date(d("2024-07-15"), None).unwrap(), d("2024-07-15"));
}

#[test]
fn calendar_search_goes_forward_when_nothing_earlier_in_range() {
    let f = mid_month();
    assert_eq!(
        f.find_closest_preferred_date(d("2024-07-08"), Some(d("2024-07-01"))).unwrap(),
        d("2024-07-15")
    );
}

#[test]
fn calendar_search_goes_back_within_range() {
    let f = mid_month();
    assert_eq!(
        f.find_closest_preferred_date(d("2024-07-20"), Some(d("2024-07-01"))).unwrap(),
        d("2024-07-15")
    );
    // Without an earliest date the reference date is the floor.
    assert_eq!(f.find_closest_preferred_date(d("2024-07-20"), None).unwrap(), d("2024-08-15"));
}

#[test]
fn calendar_search_ignores_availability() {
    // 2024-06-15 is a Saturday.
    let f = mid_month();
    assert_eq!(
        f.find_closest_preferred_date(d("2024-06-20"), Some(d("2024-06-10"))).unwrap(),
        d("2024-06-15")
    );
}

#[test]
fn workday_search_steps_back_to_preferred_workday() {
    let f = finder(
        WeekdaySet::MONDAY_TO_FRIDAY,
        Some(WeekdaySet::from(Weekday::Wednesday)),
        None,
        &[],
        ScheduleAlgorithm::default(),
    );
    assert_eq!(
        f.find_closest_preferred_date(d("2024-07-05"), Some(d("2024-07-01"))).unwrap(),
        d("2024-07-03")
    );
    // Nothing earlier in range: the reference date stands.
    assert_eq!(f.find_closest_preferred_date(d("2024-07-05"), None).unwrap(), d("2024-07-05"));
}

// ─── closest ─────────────────────────────────────────────────────────────────

#[test]
fn closest_moves_forward_to_calendar_date() {
    let f = mid_month();
    assert_eq!(f.closest(d("2024-07-10"), None, None).unwrap(), Some(d("2024-07-15")));
}

#[test]
fn closest_returns_to_earlier_calendar_date() {
    let f = mid_month();
    assert_eq!(
        f.closest(d("2024-07-20"), Some(d("2024-07-01")), None).unwrap(),
        Some(d("2024-07-15"))
    );
}

#[test]
fn closest_settles_before_unavailable_calendar_date() {
    let f = mid_month();
    assert_eq!(
        f.closest(d("2024-06-20"), Some(d("2024-06-10")), None).unwrap(),
        Some(d("2024-06-14"))
    );
}

#[test]
fn closest_moves_forward_when_floor_blocks_stepping_back() {
    let f = mid_month();
    assert_eq!(
        f.closest(d("2024-06-20"), Some(d("2024-06-15")), None).unwrap(),
        Some(d("2024-06-17"))
    );
}

#[test]
fn closest_respects_latest_date() {
    let f = mid_month();
    assert_eq!(
        f.closest(d("2024-07-20"), Some(d("2024-07-01")), Some(d("2024-07-10"))).unwrap(),
        None
    );
    assert_eq!(
        f.closest(d("2024-06-20"), Some(d("2024-06-10")), Some(d("2024-06-13"))).unwrap(),
        None
    );
}

#[test]
fn closest_with_holiday_on_calendar_date() {
    let f = finder(
        WeekdaySet::MONDAY_TO_FRIDAY,
        None,
        Some(&[15]),
        &["2024-07-15"],
        ScheduleAlgorithm::ClosestStandardWorkday,
    );
    assert_eq!(
        f.closest(d("2024-07-18"), Some(d("2024-07-10")), None).unwrap(),
        Some(d("2024-07-12"))
    );
    assert_eq!(f.closest(d("2024-07-15"), None, None).unwrap(), Some(d("2024-07-16")));
}

#[test]
fn closest_string_interface() {
    let f = mid_month();
    assert_eq!(
        f.closest_iso("2024-07-20", Some("2024-07-01"), None).unwrap().as_deref(),
        Some("2024-07-15")
    );
}

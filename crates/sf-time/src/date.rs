//! `Date` type.
//!
//! Dates are stored as a serial number of days.  Serial 1 corresponds to
//! January 1, 1900 and the supported range ends on December 31, 2199.
//! Dates carry no time of day: every constructor that accepts a time
//! component truncates it to midnight.

use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use sf_core::errors::{Error, Result};
use sf_core::utilities::data_parsers::{parse_date_slash, parse_iso_date};

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

/// Seconds in one civil day.
const SECONDS_PER_DAY: i64 = 86_400;

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if the serial is outside `[MIN, MAX]`.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::InvalidDateInput(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidDateInput(format!(
                "month {month} out of range [1, 12]"
            )));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::InvalidDateInput(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Parse an ISO 8601 date (`YYYY-MM-DD`, optionally followed by a time
    /// which is discarded).
    pub fn parse_iso(s: &str) -> Result<Self> {
        let (y, m, d) = parse_iso_date(s)
            .ok_or_else(|| Error::InvalidDateInput(format!("cannot parse {s:?} as YYYY-MM-DD")))?;
        Self::from_ymd(y, m, d)
    }

    /// Parse either an ISO 8601 date or a `DD/MM/YYYY` date.
    pub fn parse(s: &str) -> Result<Self> {
        if let Some((y, m, d)) = parse_iso_date(s) {
            return Self::from_ymd(y, m, d);
        }
        if let Some((y, m, d)) = parse_date_slash(s) {
            return Self::from_ymd(y, m, d);
        }
        Err(Error::InvalidDateInput(format!("unrecognised date {s:?}")))
    }

    /// Create a date from a unix timestamp in seconds (UTC), discarding the
    /// time of day.
    pub fn from_unix_timestamp(seconds: i64) -> Result<Self> {
        let days = seconds.div_euclid(SECONDS_PER_DAY);
        let serial = i64::from(unix_epoch_serial()) + days;
        i32::try_from(serial)
            .ok()
            .and_then(|s| Self::from_serial(s).ok())
            .ok_or_else(|| {
                Error::InvalidDateInput(format!("timestamp {seconds} out of supported range"))
            })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (1900-01-01) is a Monday, ordinal 1; serial 7 is a Sunday.
        Weekday::from_ordinal(self.0.rem_euclid(7) as u8).expect("rem_euclid always in 0..=6")
    }

    /// Return the unix timestamp (seconds, UTC) of midnight on this date.
    pub fn unix_timestamp(&self) -> i64 {
        i64::from(self.0 - unix_epoch_serial()) * SECONDS_PER_DAY
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        match self.0.checked_add(n) {
            Some(serial) if (Self::MIN.0..=Self::MAX.0).contains(&serial) => Ok(Date(serial)),
            _ => Err(Error::Date(format!(
                "date arithmetic: {self} {n:+} days is out of range"
            ))),
        }
    }

    /// The following calendar day.
    pub fn next_day(self) -> Result<Self> {
        self.add_days(1)
    }

    /// The preceding calendar day.
    pub fn previous_day(self) -> Result<Self> {
        self.add_days(-1)
    }

    /// The first day of the month after the one containing this date.
    pub fn first_of_next_month(self) -> Result<Self> {
        let (y, m, _) = ymd_from_serial(self.0);
        if m == 12 {
            if y == 2199 {
                return Err(Error::Date(format!("no month after {self}")));
            }
            Ok(Date(serial_from_ymd(y + 1, 1, 1)))
        } else {
            Ok(Date(serial_from_ymd(y, m + 1, 1)))
        }
    }

    /// Advance by a period expressed in the given time unit.
    ///
    /// Month and year arithmetic clamps the day to the end of the target
    /// month (January 31 + 1 month = February 28/29).
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(n),
            TimeUnit::Weeks => self.add_days(scaled(n, 7, unit)?),
            TimeUnit::Months => {
                let (y, m, d) = ymd_from_serial(self.0);
                let total_months = (y as i32 * 12 + (m as i32 - 1))
                    .checked_add(n)
                    .ok_or_else(|| Error::Date(format!("{self} {n:+} months is out of range")))?;
                let new_y = total_months.div_euclid(12);
                let new_m = (total_months.rem_euclid(12) + 1) as u8;
                if !(1900..=2199).contains(&new_y) {
                    return Err(Error::Date(format!("year {new_y} out of range")));
                }
                let new_y = new_y as u16;
                let new_d = d.min(days_in_month(new_y, new_m));
                Ok(Date(serial_from_ymd(new_y, new_m, new_d)))
            }
            TimeUnit::Years => self.advance(scaled(n, 12, unit)?, TimeUnit::Months),
        }
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Break the distance from `self` to `other` into whole years, months
    /// and leftover days.
    pub fn calendar_span(self, other: Date) -> CalendarSpan {
        let (start, end, inverted) = if other >= self {
            (self, other, false)
        } else {
            (other, self, true)
        };
        let (y1, m1, d1) = ymd_from_serial(start.0);
        let (y2, m2, d2) = ymd_from_serial(end.0);

        let mut months = (y2 as i32 - y1 as i32) * 12 + (m2 as i32 - m1 as i32);
        let days = if d2 >= d1 {
            (d2 - d1) as u32
        } else {
            // Borrow the length of the month preceding the end date.
            months -= 1;
            let (py, pm) = if m2 == 1 { (y2 - 1, 12) } else { (y2, m2 - 1) };
            let borrowed = days_in_month(py, pm).max(d1);
            (borrowed - d1 + d2) as u32
        };

        CalendarSpan {
            years: (months / 12) as u32,
            months: (months % 12) as u32,
            days,
            total_days: (end.0 - start.0) as u32,
            inverted,
        }
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Format as `YYYY-MM-DD`.
    pub fn to_iso_string(&self) -> String {
        self.to_string()
    }
}

/// The difference between two dates as produced by [`Date::calendar_span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarSpan {
    /// Whole years.
    pub years: u32,
    /// Whole months beyond `years` (0–11).
    pub months: u32,
    /// Days beyond the whole months.
    pub days: u32,
    /// Absolute number of days between the two dates.
    pub total_days: u32,
    /// `true` when the second date precedes the first.
    pub inverted: bool,
}

impl CalendarSpan {
    /// Whole months including the years component.
    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

// ── Parsing / Display ─────────────────────────────────────────────────────────

impl std::str::FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Date::parse(s)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Date::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        let year = u16::try_from(d.year())
            .map_err(|_| Error::InvalidDateInput(format!("year {} out of range", d.year())))?;
        Date::from_ymd(year, d.month() as u8, d.day() as u8)
    }
}

#[cfg(feature = "chrono")]
impl From<Date> for chrono::NaiveDate {
    fn from(d: Date) -> Self {
        let (y, m, day) = ymd_from_serial(d.0);
        chrono::NaiveDate::from_ymd_opt(y as i32, m as u32, day as u32)
            .expect("every serial in range is a valid chrono date")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// `n` units expressed as `factor` smaller units.
fn scaled(n: i32, factor: i32, unit: TimeUnit) -> Result<i32> {
    n.checked_mul(factor)
        .ok_or_else(|| Error::Date(format!("{n} {unit} is out of range")))
}

fn unix_epoch_serial() -> i32 {
    serial_from_ymd(1970, 1, 1)
}

/// Convert (year, month, day) to a serial number.
///
/// Serial 1 = 1900-01-01.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let m = month as i32;
    let d = day as i32;

    // Days in years 1900..year
    let mut serial = (y - 1900) * 365;
    // Leap years in [1900, year)
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[m as usize - 1] as i32;
    if m > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial += d;
    serial
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        let start_of_year = serial_from_ymd(y, 1, 1);
        if serial < start_of_year {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let doy = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    let mut remaining = doy;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

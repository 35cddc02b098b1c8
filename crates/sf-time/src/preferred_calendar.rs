//! Preferred calendar: the days of each month that a schedule favours.
//!
//! For example, a business that ships on the 5th, 15th and 25th of every
//! month is described by `PreferredCalendar::every_month(&[5, 15, 25])`.

use crate::date::Date;
use crate::month::Month;
use serde::{Deserialize, Serialize};
use sf_core::ensure;
use sf_core::errors::{Error, Result};
use std::collections::BTreeMap;

/// Every day-of-month number, 1 through 31.
pub const EVERY_DAY: [u8; 31] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26,
    27, 28, 29, 30, 31,
];

/// A table mapping each month to a set of days-of-month.
///
/// Each month is stored as a bitmask where bit `d` is set when day `d` is
/// preferred.  Days that do not exist in a given month (the 31st of April)
/// may be listed; they simply never match.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<u8, Vec<u8>>", into = "BTreeMap<u8, Vec<u8>>")]
pub struct PreferredCalendar {
    months: [u32; 12],
}

impl PreferredCalendar {
    /// An empty table with no preferred days.
    pub fn new() -> Self {
        Self::default()
    }

    /// The same `days` in every month of the year.
    pub fn every_month(days: &[u8]) -> Result<Self> {
        Self::for_months(&Month::ALL, days)
    }

    /// The same `days` in each of the given `months`.
    pub fn for_months(months: &[Month], days: &[u8]) -> Result<Self> {
        let mut calendar = Self::new();
        for &month in months {
            calendar.set_days(month, days)?;
        }
        Ok(calendar)
    }

    /// Replace the preferred days of `month` with `days`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] for a day outside 1–31.
    pub fn set_days(&mut self, month: Month, days: &[u8]) -> Result<()> {
        let mut mask = 0u32;
        for &day in days {
            ensure!(
                (1..=31).contains(&day),
                "day-of-month {day} for {month} is outside 1-31"
            );
            mask |= 1 << day;
        }
        self.months[month as usize - 1] = mask;
        Ok(())
    }

    /// Consuming variant of [`set_days`](Self::set_days).
    pub fn with_days(mut self, month: Month, days: &[u8]) -> Result<Self> {
        self.set_days(month, days)?;
        Ok(self)
    }

    /// Return `true` if `date`'s day-of-month is preferred in `date`'s month.
    pub fn contains(&self, date: Date) -> bool {
        self.months[date.month() as usize - 1] & (1 << date.day_of_month()) != 0
    }

    /// Return `true` if `month` has at least one preferred day.
    pub fn has_days_in(&self, month: Month) -> bool {
        self.months[month as usize - 1] != 0
    }

    /// Return `true` if no month has any preferred day.
    pub fn is_empty(&self) -> bool {
        self.months.iter().all(|&mask| mask == 0)
    }

    /// The preferred days of `month`, ascending.
    pub fn days_in(&self, month: Month) -> Vec<u8> {
        let mask = self.months[month as usize - 1];
        (1..=31u8).filter(|d| mask & (1 << d) != 0).collect()
    }
}

impl TryFrom<BTreeMap<u8, Vec<u8>>> for PreferredCalendar {
    type Error = Error;

    fn try_from(table: BTreeMap<u8, Vec<u8>>) -> Result<Self> {
        let mut calendar = Self::new();
        for (number, days) in table {
            let month = Month::from_number(number).ok_or_else(|| {
                Error::InvalidConfiguration(format!("month {number} is outside 1-12"))
            })?;
            calendar.set_days(month, &days)?;
        }
        Ok(calendar)
    }
}

impl From<PreferredCalendar> for BTreeMap<u8, Vec<u8>> {
    fn from(calendar: PreferredCalendar) -> Self {
        Month::ALL
            .into_iter()
            .filter(|m| calendar.has_days_in(*m))
            .map(|m| (m.number(), calendar.days_in(m)))
            .collect()
    }
}

impl std::fmt::Debug for PreferredCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                Month::ALL
                    .into_iter()
                    .filter(|m| self.has_days_in(*m))
                    .map(|m| (m, self.days_in(m))),
            )
            .finish()
    }
}

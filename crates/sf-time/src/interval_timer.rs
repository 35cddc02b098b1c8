//! `IntervalTimer`: recurring dates every *n* days, weeks, months or years
//! from a reference date.
//!
//! The timer answers "which occurrence is due on or after this date?" using
//! whole-interval arithmetic on the calendar distance between the reference
//! date and the query date, so it never iterates over occurrences.

use crate::date::{CalendarSpan, Date};
use crate::period::Period;
use crate::time_unit::TimeUnit;
use sf_core::errors::{Error, Result};

/// A fixed-interval recurrence anchored on a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTimer {
    reference: Date,
    period: Period,
}

impl IntervalTimer {
    /// Create a timer recurring every `period` from `reference`.
    ///
    /// Lengths below 1 are raised to 1 and weeks are counted as days.
    ///
    /// # Errors
    /// [`Error::InvalidConfiguration`](sf_core::errors::Error::InvalidConfiguration)
    /// if the period is too long to count in days.
    pub fn new(reference: Date, period: Period) -> Result<Self> {
        let period = Period::new(period.length.max(1), period.unit).normalized()?;
        Ok(Self { reference, period })
    }

    fn every(reference: Date, length: i32, unit: TimeUnit) -> Self {
        Self { reference, period: Period::new(length, unit) }
    }

    /// Every 7 days.
    pub fn weekly(reference: Date) -> Self {
        Self::every(reference, 7, TimeUnit::Days)
    }

    /// Every 14 days.
    pub fn fortnightly(reference: Date) -> Self {
        Self::every(reference, 14, TimeUnit::Days)
    }

    /// Every month.
    pub fn monthly(reference: Date) -> Self {
        Self::every(reference, 1, TimeUnit::Months)
    }

    /// Every 6 months.
    pub fn six_monthly(reference: Date) -> Self {
        Self::every(reference, 6, TimeUnit::Months)
    }

    /// Every year.
    pub fn yearly(reference: Date) -> Self {
        Self::every(reference, 1, TimeUnit::Years)
    }

    /// Every 10 years.
    pub fn per_decade(reference: Date) -> Self {
        Self::every(reference, 10, TimeUnit::Years)
    }

    /// The date occurrences are counted from.
    pub fn reference_date(&self) -> Date {
        self.reference
    }

    /// The interval between occurrences.
    pub fn period(&self) -> Period {
        self.period
    }

    /// The occurrence due on or after `from`, shifted by `offset`
    /// occurrences (negative offsets step back).
    pub fn next_date(&self, offset: i32, from: Date) -> Result<Date> {
        let span = self.reference.calendar_span(from);
        let steps = self
            .intervals_until(&span)
            .checked_add(offset)
            .and_then(|n| n.checked_mul(self.period.length))
            .ok_or_else(|| {
                Error::Date(format!("occurrence {offset:+} of {} is out of range", self.period))
            })?;
        self.reference.advance(steps, self.period.unit)
    }

    /// `count` consecutive occurrences (at least one) starting with the one
    /// due on or after `from`.
    pub fn dates(&self, count: usize, from: Date) -> Result<Vec<Date>> {
        (0..count.max(1) as i32)
            .map(|offset| self.next_date(offset, from))
            .collect()
    }

    /// Return `true` if an occurrence falls exactly on `date`.
    pub fn is_schedule_date(&self, date: Date) -> Result<bool> {
        Ok(self.next_date(0, date)? == date)
    }

    /// Signed number of whole intervals from the reference date to the
    /// occurrence due on or after the span's end.
    fn intervals_until(&self, span: &CalendarSpan) -> i32 {
        let length = self.period.length as u32;
        let (elapsed, leftover) = match self.period.unit {
            TimeUnit::Days | TimeUnit::Weeks => (span.total_days, false),
            TimeUnit::Months => (span.total_months(), span.days > 0),
            TimeUnit::Years => (span.years, span.months > 0 || span.days > 0),
        };
        let whole = (elapsed / length) as i32;
        let remainder = elapsed % length;

        if span.inverted {
            return -whole;
        }
        if remainder > 0 || leftover {
            whole + 1
        } else {
            whole
        }
    }
}

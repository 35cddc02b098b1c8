//! `WorkCalendar`: standard workdays plus explicitly excluded dates.
//!
//! A date is a business day when its weekday is a standard workday and it
//! has not been excluded (public holidays, shutdowns, …).

use crate::date::Date;
use crate::weekday::WeekdaySet;
use std::collections::HashSet;

/// A calendar of standard workdays with user-defined exclusions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkCalendar {
    workdays: WeekdaySet,
    excluded: HashSet<Date>,
}

impl WorkCalendar {
    /// Create a calendar open on `workdays` with no exclusions.
    pub fn new(workdays: WeekdaySet) -> Self {
        Self {
            workdays,
            excluded: HashSet::new(),
        }
    }

    /// Create a calendar open on `workdays` that excludes `dates`.
    pub fn with_excluded<I: IntoIterator<Item = Date>>(workdays: WeekdaySet, dates: I) -> Self {
        Self {
            workdays,
            excluded: dates.into_iter().collect(),
        }
    }

    /// The standard workdays.
    pub fn workdays(&self) -> WeekdaySet {
        self.workdays
    }

    /// Exclude a date. Days that are not workdays are already closed.
    pub fn exclude(&mut self, date: Date) {
        self.excluded.insert(date);
    }

    /// Remove a previously excluded date.
    pub fn include(&mut self, date: Date) {
        self.excluded.remove(&date);
    }

    /// Return `true` if `date` was explicitly excluded.
    pub fn is_excluded(&self, date: Date) -> bool {
        self.excluded.contains(&date)
    }

    /// Excluded dates in ascending order.
    pub fn excluded_dates(&self) -> Vec<Date> {
        let mut dates: Vec<Date> = self.excluded.iter().copied().collect();
        dates.sort_unstable();
        dates
    }

    /// Return `true` if `date` falls on a standard workday, ignoring
    /// exclusions.
    pub fn is_workday(&self, date: Date) -> bool {
        self.workdays.contains(date.weekday())
    }

    /// Return `true` if `date` is a workday and not excluded.
    pub fn is_business_day(&self, date: Date) -> bool {
        self.is_workday(date) && !self.is_excluded(date)
    }

    /// Return `true` if `date` is not a business day.
    pub fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }
}

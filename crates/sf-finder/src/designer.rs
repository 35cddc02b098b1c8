//! `ScheduleDesigner`: a consuming builder for [`Finder`].
//!
//! ```
//! use sf_finder::{ScheduleAlgorithm, ScheduleDesigner};
//! use sf_time::{Date, Weekday};
//!
//! let finder = ScheduleDesigner::new()
//!     .available_on(&[Weekday::Monday, Weekday::Wednesday, Weekday::Friday])
//!     .prefer_days_every_month(&[5, 15, 25])
//!     .exclude_date(Date::parse_iso("2024-06-17").unwrap())
//!     .use_algorithm(ScheduleAlgorithm::ClosestStandardWorkday)
//!     .build()
//!     .unwrap();
//!
//! let from = Date::parse_iso("2024-06-15").unwrap();
//! assert_eq!(finder.next(from, None, None).unwrap(), Some(Date::parse_iso("2024-06-19").unwrap()));
//! ```

use crate::algorithm::ScheduleAlgorithm;
use crate::finder::Finder;
use crate::settings::FinderSettings;
use sf_core::errors::Result;
use sf_time::{Date, Month, PreferredCalendar, Weekday, WeekdaySet};
use std::collections::BTreeMap;

/// Accumulates a schedule description and builds a [`Finder`] from it.
///
/// Day-of-month values are validated by [`build`](Self::build), so the chain
/// itself never fails.
#[derive(Debug, Clone, Default)]
pub struct ScheduleDesigner {
    standard_workdays: WeekdaySet,
    preferred_workdays: Option<WeekdaySet>,
    preferred_calendar: Option<BTreeMap<u8, Vec<u8>>>,
    excluded_dates: Option<Vec<Date>>,
    algorithm: ScheduleAlgorithm,
    settings: FinderSettings,
}

impl ScheduleDesigner {
    /// Begin with no workdays, preferences or exclusions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `days` to the standard workdays.
    pub fn available_on(mut self, days: &[Weekday]) -> Self {
        self.standard_workdays = self.standard_workdays.union(WeekdaySet::of(days));
        self
    }

    /// Add Monday through Friday to the standard workdays.
    pub fn available_monday_to_friday(mut self) -> Self {
        self.standard_workdays = self.standard_workdays.union(WeekdaySet::MONDAY_TO_FRIDAY);
        self
    }

    /// Add Saturday and Sunday to the standard workdays.
    pub fn available_on_weekends(mut self) -> Self {
        self.standard_workdays = self.standard_workdays.union(WeekdaySet::WEEKENDS);
        self
    }

    /// Add `days` to the preferred workdays.
    pub fn prefer(self, days: &[Weekday]) -> Self {
        self.prefer_set(WeekdaySet::of(days))
    }

    /// Add Monday through Friday to the preferred workdays.
    pub fn prefer_monday_to_friday(self) -> Self {
        self.prefer_set(WeekdaySet::MONDAY_TO_FRIDAY)
    }

    /// Add Saturday and Sunday to the preferred workdays.
    pub fn prefer_weekends(self) -> Self {
        self.prefer_set(WeekdaySet::WEEKENDS)
    }

    /// Prefer `days` of `month`, replacing any earlier choice for that month.
    pub fn prefer_days_in_month(mut self, month: Month, days: &[u8]) -> Self {
        self.preferred_calendar
            .get_or_insert_with(BTreeMap::new)
            .insert(month.number(), days.to_vec());
        self
    }

    /// Prefer `days` in every month.
    pub fn prefer_days_every_month(self, days: &[u8]) -> Self {
        Month::ALL
            .into_iter()
            .fold(self, |designer, month| designer.prefer_days_in_month(month, days))
    }

    /// Exclude a single date.
    pub fn exclude_date(mut self, date: Date) -> Self {
        self.excluded_dates.get_or_insert_with(Vec::new).push(date);
        self
    }

    /// Exclude several dates.
    pub fn exclude_dates<I: IntoIterator<Item = Date>>(mut self, dates: I) -> Self {
        self.excluded_dates.get_or_insert_with(Vec::new).extend(dates);
        self
    }

    /// Resolve dates with `algorithm`.
    pub fn use_algorithm(mut self, algorithm: ScheduleAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Use `settings` for the built finder.
    pub fn with_settings(mut self, settings: FinderSettings) -> Self {
        self.settings = settings;
        self
    }

    fn prefer_set(mut self, days: WeekdaySet) -> Self {
        let current = self.preferred_workdays.unwrap_or_default();
        self.preferred_workdays = Some(current.union(days));
        self
    }

    /// Build the finder.
    ///
    /// # Errors
    /// Everything [`Finder::with_settings`] rejects, plus day-of-month
    /// values outside 1–31.
    pub fn build(self) -> Result<Finder> {
        let preferred_calendar = self
            .preferred_calendar
            .map(PreferredCalendar::try_from)
            .transpose()?;
        Finder::with_settings(
            self.standard_workdays,
            self.preferred_workdays,
            preferred_calendar,
            self.excluded_dates,
            self.algorithm,
            self.settings,
        )
    }
}

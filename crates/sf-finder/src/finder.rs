//! `Finder`: the schedule date search engine.
//!
//! A finder answers "which date should this happen on?" for a reference
//! date, given:
//!
//! - the **standard workdays** on which anything may be scheduled,
//! - optional **preferred workdays** (a subset of the standard ones),
//! - an optional **preferred calendar** of days-of-month per month,
//! - **excluded dates** (holidays) that are never available,
//! - a [`ScheduleAlgorithm`] that decides what happens when the preferred
//!   date is not available.
//!
//! Every search is bounded by the iteration limit in [`FinderSettings`];
//! running out is reported as
//! [`Error::IterationLimitExceeded`](sf_core::errors::Error::IterationLimitExceeded).
//!
//! # Example
//!
//! ```
//! use sf_finder::{Finder, ScheduleAlgorithm};
//! use sf_time::{Date, PreferredCalendar, WeekdaySet};
//!
//! let finder = Finder::new(
//!     WeekdaySet::MONDAY_TO_FRIDAY,
//!     None,
//!     Some(PreferredCalendar::every_month(&[5, 15, 25]).unwrap()),
//!     None,
//!     ScheduleAlgorithm::default(),
//! )
//! .unwrap();
//!
//! let from = Date::parse_iso("2024-06-30").unwrap();
//! assert_eq!(finder.next(from, None, None).unwrap(), Some(Date::parse_iso("2024-07-05").unwrap()));
//! ```

use crate::algorithm::ScheduleAlgorithm;
use crate::cursor::SearchCursor;
use crate::settings::FinderSettings;
use sf_core::ensure;
use sf_core::errors::Result;
use sf_time::{Date, Month, PreferredCalendar, WeekdaySet, WorkCalendar};
use tracing::{debug, trace};

/// What one algorithm pass decided.
enum Step {
    /// The cursor holds the result.
    Accept,
    /// Hand the cursor to [`ScheduleAlgorithm::fallback`].
    FallBack,
}

/// An immutable schedule configuration that finds qualifying dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finder {
    calendar: WorkCalendar,
    preferred_workdays: Option<WeekdaySet>,
    preferred_calendar: Option<PreferredCalendar>,
    algorithm: ScheduleAlgorithm,
    settings: FinderSettings,
}

impl Finder {
    // ── Construction ──────────────────────────────────────────────────────────

    /// Create a finder with default [`FinderSettings`].
    ///
    /// See [`with_settings`](Self::with_settings) for the validation rules.
    pub fn new(
        standard_workdays: WeekdaySet,
        preferred_workdays: Option<WeekdaySet>,
        preferred_calendar: Option<PreferredCalendar>,
        excluded_dates: Option<Vec<Date>>,
        algorithm: ScheduleAlgorithm,
    ) -> Result<Self> {
        Self::with_settings(
            standard_workdays,
            preferred_workdays,
            preferred_calendar,
            excluded_dates,
            algorithm,
            FinderSettings::default(),
        )
    }

    /// Create a finder with explicit settings.
    ///
    /// Preferred workdays are narrowed to the standard workdays; an empty
    /// result is treated as "no preference".  When `excluded_dates` is
    /// `None` the settings' default exclusion list is used.
    ///
    /// # Errors
    /// [`Error::InvalidConfiguration`] if `standard_workdays` is empty, the
    /// preferred calendar has no day in any month, or the iteration limit is
    /// zero.
    ///
    /// [`Error::InvalidConfiguration`]: sf_core::errors::Error::InvalidConfiguration
    pub fn with_settings(
        standard_workdays: WeekdaySet,
        preferred_workdays: Option<WeekdaySet>,
        preferred_calendar: Option<PreferredCalendar>,
        excluded_dates: Option<Vec<Date>>,
        algorithm: ScheduleAlgorithm,
        settings: FinderSettings,
    ) -> Result<Self> {
        ensure!(
            !standard_workdays.is_empty(),
            "at least one standard workday must be specified"
        );
        if let Some(calendar) = &preferred_calendar {
            ensure!(
                !calendar.is_empty(),
                "at least one preferred calendar date must be specified, otherwise pass None"
            );
        }
        settings.validate()?;

        let preferred_workdays = preferred_workdays
            .map(|days| days.intersection(standard_workdays))
            .filter(|days| !days.is_empty());
        let excluded = excluded_dates.unwrap_or_else(|| settings.default_excluded_dates.clone());

        Ok(Self {
            calendar: WorkCalendar::with_excluded(standard_workdays, excluded),
            preferred_workdays,
            preferred_calendar,
            algorithm,
            settings,
        })
    }

    /// A copy of this finder that resolves dates with `algorithm`.
    pub fn with_algorithm(&self, algorithm: ScheduleAlgorithm) -> Self {
        Self {
            algorithm,
            ..self.clone()
        }
    }

    // ── Inspectors ────────────────────────────────────────────────────────────

    /// The weekdays on which anything may be scheduled.
    pub fn standard_workdays(&self) -> WeekdaySet {
        self.calendar.workdays()
    }

    /// The preferred weekdays, if any survived narrowing.
    pub fn preferred_workdays(&self) -> Option<WeekdaySet> {
        self.preferred_workdays
    }

    /// The preferred days-of-month table.
    pub fn preferred_calendar(&self) -> Option<&PreferredCalendar> {
        self.preferred_calendar.as_ref()
    }

    /// Excluded dates, ascending.
    pub fn excluded_dates(&self) -> Vec<Date> {
        self.calendar.excluded_dates()
    }

    /// The availability calendar (standard workdays and exclusions).
    pub fn work_calendar(&self) -> &WorkCalendar {
        &self.calendar
    }

    /// The active algorithm.
    pub fn algorithm(&self) -> ScheduleAlgorithm {
        self.algorithm
    }

    /// The search settings.
    pub fn settings(&self) -> &FinderSettings {
        &self.settings
    }

    // ── Predicates ────────────────────────────────────────────────────────────

    /// A standard workday that has not been excluded.
    pub fn is_available(&self, date: Date) -> bool {
        self.calendar.is_business_day(date)
    }

    /// A preferred weekday, or a standard weekday when no preference is set.
    /// Exclusions are ignored.
    pub fn is_preferred_workday(&self, date: Date) -> bool {
        self.preferred_workdays
            .unwrap_or_else(|| self.calendar.workdays())
            .contains(date.weekday())
    }

    /// A day listed for its month in the preferred calendar.
    pub fn is_preferred_calendar_date(&self, date: Date) -> bool {
        self.preferred_calendar
            .as_ref()
            .is_some_and(|calendar| calendar.contains(date))
    }

    /// The most specific preference configured: the preferred calendar, then
    /// preferred workdays, then standard workdays.  Exclusions are ignored.
    pub fn is_preferred_date(&self, date: Date) -> bool {
        if self.preferred_calendar.is_some() {
            self.is_preferred_calendar_date(date)
        } else if self.preferred_workdays.is_some() {
            self.is_preferred_workday(date)
        } else {
            self.calendar.is_workday(date)
        }
    }

    // ── Searches ──────────────────────────────────────────────────────────────

    /// The scheduled date for `from`.
    ///
    /// Closest-style algorithms may return a date before `from` but never
    /// before `earliest` (which defaults to `from`).  Returns `Ok(None)` when
    /// the date found falls after `latest`.
    pub fn next(
        &self,
        from: Date,
        earliest: Option<Date>,
        latest: Option<Date>,
    ) -> Result<Option<Date>> {
        let mut cursor = self.cursor(from, earliest.unwrap_or(from));

        if !self.is_preferred_date(cursor.date) {
            self.advance_to_next_preferred_date(&mut cursor)?;
        }

        loop {
            cursor.spend()?;
            if self.is_available(cursor.date) && self.is_preferred_date(cursor.date) {
                break;
            }
            if self.resolve(&mut cursor, self.algorithm, true)? {
                break;
            }
            self.advance_to_next_preferred_date(&mut cursor)?;
        }

        let result = Some(cursor.date).filter(|date| within(*date, latest));
        debug!(
            %from,
            ?earliest,
            ?latest,
            algorithm = %self.algorithm,
            ?result,
            "next scheduled date"
        );
        Ok(result)
    }

    /// The scheduled date closest to `date`, allowing a return to an earlier
    /// preferred date no sooner than `earliest`.
    ///
    /// Returns `Ok(None)` when the date found falls after `latest`.
    pub fn closest(
        &self,
        date: Date,
        earliest: Option<Date>,
        latest: Option<Date>,
    ) -> Result<Option<Date>> {
        let floor = earliest.unwrap_or(date);
        let preferred = self.find_closest_preferred_date(date, Some(floor))?;
        let available = self.is_available(preferred);

        let result = if available && within(preferred, latest) {
            Some(preferred)
        } else {
            let mut start = preferred;
            let mut settled = None;
            if !available && preferred < date {
                let mut cursor = self.cursor(preferred, floor);
                if self.resolve(&mut cursor, ScheduleAlgorithm::ClosestStandardWorkday, true)?
                    && within(cursor.date, latest)
                {
                    settled = Some(cursor.date);
                }
                start = cursor.date;
            }
            match settled {
                Some(found) => Some(found),
                None => self.next(start, Some(floor), latest)?,
            }
        };

        debug!(%date, ?earliest, ?latest, %preferred, ?result, "closest scheduled date");
        Ok(result)
    }

    /// The preferred date nearest to `date`, ignoring availability.
    ///
    /// With a preferred calendar this is the latest calendar date between
    /// `earliest` (default `date`) and `date`, or else the next calendar date
    /// after it.  Without one, `date` itself is returned when no earlier
    /// preferred workday is in range.
    pub fn find_closest_preferred_date(&self, date: Date, earliest: Option<Date>) -> Result<Date> {
        let mut cursor = self.cursor(date, earliest.unwrap_or(date));

        let result = loop {
            cursor.spend()?;
            if self.is_preferred_date(cursor.date) {
                break cursor.date;
            }

            if self.preferred_calendar.is_some() {
                if let Some(found) =
                    cursor.scan_backward(|d| self.is_preferred_calendar_date(d))?
                {
                    break found;
                }
                cursor.scan_forward(|d| self.is_preferred_calendar_date(d))?;
                break cursor.date;
            }

            if self.resolve(&mut cursor, ScheduleAlgorithm::ClosestPreferredWorkday, false)? {
                break cursor.date;
            }
            self.advance_to_next_preferred_date(&mut cursor)?;
        };

        debug!(%date, ?earliest, %result, "closest preferred date");
        Ok(result)
    }

    /// [`next`](Self::next) over ISO 8601 strings.
    ///
    /// # Errors
    /// [`Error::InvalidDateInput`](sf_core::errors::Error::InvalidDateInput)
    /// if any argument does not parse.
    pub fn next_iso(
        &self,
        from: &str,
        earliest: Option<&str>,
        latest: Option<&str>,
    ) -> Result<Option<String>> {
        let (from, earliest, latest) = parse_arguments(from, earliest, latest)?;
        Ok(self.next(from, earliest, latest)?.map(|d| d.to_iso_string()))
    }

    /// [`closest`](Self::closest) over ISO 8601 strings.
    pub fn closest_iso(
        &self,
        date: &str,
        earliest: Option<&str>,
        latest: Option<&str>,
    ) -> Result<Option<String>> {
        let (date, earliest, latest) = parse_arguments(date, earliest, latest)?;
        Ok(self.closest(date, earliest, latest)?.map(|d| d.to_iso_string()))
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    fn cursor(&self, date: Date, not_before: Date) -> SearchCursor {
        SearchCursor::new(date, not_before, self.settings.iteration_limit)
    }

    fn admits(&self, date: Date, require_available: bool) -> bool {
        !require_available || self.is_available(date)
    }

    /// Step forward (at least once) to the next preferred date, skipping
    /// whole months that have no preferred calendar days.
    fn advance_to_next_preferred_date(&self, cursor: &mut SearchCursor) -> Result<()> {
        loop {
            cursor.spend()?;
            cursor.date = match &self.preferred_calendar {
                Some(calendar) if !calendar.has_days_in(Month::of(cursor.date)) => {
                    trace!(from = %cursor.date, "skipping month without preferred days");
                    cursor.date.first_of_next_month()?
                }
                _ => cursor.date.next_day()?,
            };
            if self.is_preferred_date(cursor.date) {
                return Ok(());
            }
        }
    }

    /// Run `algorithm` and its fallbacks from the cursor's date.
    ///
    /// Returns `true` with the cursor on the chosen date, or `false` when the
    /// caller should move on to the next preferred date.
    fn resolve(
        &self,
        cursor: &mut SearchCursor,
        algorithm: ScheduleAlgorithm,
        require_available: bool,
    ) -> Result<bool> {
        let mut current = algorithm;
        loop {
            match self.step(cursor, current, require_available)? {
                Step::Accept => return Ok(true),
                Step::FallBack => match current.fallback() {
                    Some(next) => {
                        trace!(
                            from = %current,
                            to = %next,
                            date = %cursor.date,
                            not_before = %cursor.not_before,
                            "algorithm fallback"
                        );
                        current = next;
                    }
                    None => return Ok(false),
                },
            }
        }
    }

    fn step(
        &self,
        cursor: &mut SearchCursor,
        algorithm: ScheduleAlgorithm,
        require_available: bool,
    ) -> Result<Step> {
        let admits = |d: Date| self.admits(d, require_available);

        match algorithm {
            ScheduleAlgorithm::ClosestPreferredThenClosestStandardWorkday
            | ScheduleAlgorithm::ClosestPreferredWorkday => {
                let origin = cursor.date;
                if let Some(found) = cursor.scan_backward(|d| self.is_preferred_workday(d))? {
                    if admits(found) {
                        cursor.date = found;
                        return Ok(Step::Accept);
                    }
                }
                if let Some(found) = cursor.scan_backward(admits)? {
                    cursor.date = found;
                    return Ok(Step::Accept);
                }
                cursor.restart_after(origin)?;
                Ok(Step::FallBack)
            }
            ScheduleAlgorithm::ClosestStandardWorkday => {
                let origin = cursor.date;
                if let Some(found) = cursor.scan_backward(admits)? {
                    cursor.date = found;
                    return Ok(Step::Accept);
                }
                cursor.restart_after(origin)?;
                Ok(Step::FallBack)
            }
            ScheduleAlgorithm::NextPreferredThenClosestStandardWorkday => {
                cursor.scan_forward(|d| self.is_preferred_workday(d))?;
                if admits(cursor.date) {
                    Ok(Step::Accept)
                } else {
                    Ok(Step::FallBack)
                }
            }
            ScheduleAlgorithm::NextPreferredWorkday => {
                cursor.scan_forward(|d| admits(d) && self.is_preferred_workday(d))?;
                Ok(Step::Accept)
            }
            ScheduleAlgorithm::NextStandardWorkday => {
                cursor.scan_forward(admits)?;
                Ok(Step::Accept)
            }
            ScheduleAlgorithm::OnlyPreferredDates => {
                if self.preferred_calendar.is_some() {
                    cursor.scan_forward(|d| admits(d) && self.is_preferred_calendar_date(d))?;
                    Ok(Step::Accept)
                } else if self.preferred_workdays.is_some() {
                    cursor.scan_forward(|d| admits(d) && self.is_preferred_workday(d))?;
                    Ok(Step::Accept)
                } else {
                    Ok(Step::FallBack)
                }
            }
        }
    }
}

fn within(date: Date, latest: Option<Date>) -> bool {
    latest.map_or(true, |latest| date <= latest)
}

fn parse_arguments(
    date: &str,
    earliest: Option<&str>,
    latest: Option<&str>,
) -> Result<(Date, Option<Date>, Option<Date>)> {
    Ok((
        Date::parse(date)?,
        earliest.map(Date::parse).transpose()?,
        latest.map(Date::parse).transpose()?,
    ))
}

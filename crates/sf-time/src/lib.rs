//! # sf-time
//!
//! Date, weekday, month, calendar, and interval-timer types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `WorkCalendar`: standard workdays plus excluded dates.
pub mod calendar;

/// `Date` type.
pub mod date;

/// `IntervalTimer`: fixed-interval recurrences.
pub mod interval_timer;

/// `Month`: month of the year.
pub mod month;

/// `Period`: a time span in a `TimeUnit`.
pub mod period;

/// `PreferredCalendar`: favoured days of each month.
pub mod preferred_calendar;

/// `TimeUnit`: days, weeks, months, years.
pub mod time_unit;

/// `Weekday`: day of the week, and `WeekdaySet`.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::WorkCalendar;
pub use date::{CalendarSpan, Date};
pub use interval_timer::IntervalTimer;
pub use month::Month;
pub use period::Period;
pub use preferred_calendar::{PreferredCalendar, EVERY_DAY};
pub use time_unit::TimeUnit;
pub use weekday::{Weekday, WeekdaySet};

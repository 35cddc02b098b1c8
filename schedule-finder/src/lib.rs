//! # schedule-finder
//!
//! Find the next (or closest) date that satisfies a set of standard
//! workdays, preferred workdays, preferred days of the month, and excluded
//! dates.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `sf-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! schedule-finder = "0.1"
//! ```
//!
//! ```rust
//! use schedule_finder::{Date, ScheduleAlgorithm, ScheduleDesigner, Weekday};
//!
//! let finder = ScheduleDesigner::new()
//!     .available_on(&[Weekday::Monday, Weekday::Wednesday, Weekday::Friday])
//!     .exclude_date(Date::parse_iso("2024-07-03").unwrap())
//!     .use_algorithm(ScheduleAlgorithm::NextStandardWorkday)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     finder.next_iso("2024-07-02", None, None).unwrap().as_deref(),
//!     Some("2024-07-05")
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and parsing utilities.
pub use sf_core as core;

/// Date, weekday, calendar, and interval-timer types.
pub use sf_time as time;

/// The date search engine, designer, and configuration.
pub use sf_finder as finder;

pub use sf_core::errors::{Error, Result};
pub use sf_finder::{
    Finder, FinderConfig, FinderSettings, ScheduleAlgorithm, ScheduleDesigner,
};
pub use sf_time::{
    Date, IntervalTimer, Month, Period, PreferredCalendar, TimeUnit, Weekday, WeekdaySet,
    WorkCalendar,
};

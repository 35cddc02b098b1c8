//! JSON configuration for [`Finder`].
//!
//! ```json
//! {
//!   "standard_workdays": ["Monday", "Tuesday", "Wednesday"],
//!   "preferred_calendar": { "6": [7, 15, 25], "7": [7, 15, 25] },
//!   "excluded_dates": ["2024-07-03"],
//!   "algorithm": "ClosestStandardWorkday",
//!   "iteration_limit": 5000
//! }
//! ```
//!
//! Every field is optional; omitted fields take the [`Default`] values.

use crate::algorithm::ScheduleAlgorithm;
use crate::finder::Finder;
use crate::settings::{FinderSettings, DEFAULT_ITERATION_LIMIT};
use serde::{Deserialize, Serialize};
use sf_core::errors::{Error, Result};
use sf_time::{Date, PreferredCalendar, WeekdaySet};

/// A serialisable description of a [`Finder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FinderConfig {
    /// Weekdays on which anything may be scheduled.
    pub standard_workdays: WeekdaySet,
    /// Preferred subset of the standard workdays.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_workdays: Option<WeekdaySet>,
    /// Preferred days-of-month keyed by month number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_calendar: Option<PreferredCalendar>,
    /// Dates that are never available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_dates: Option<Vec<Date>>,
    /// Resolution policy.
    pub algorithm: ScheduleAlgorithm,
    /// Maximum search steps per call.
    pub iteration_limit: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            standard_workdays: WeekdaySet::MONDAY_TO_FRIDAY,
            preferred_workdays: None,
            preferred_calendar: None,
            excluded_dates: None,
            algorithm: ScheduleAlgorithm::default(),
            iteration_limit: DEFAULT_ITERATION_LIMIT,
        }
    }
}

impl FinderConfig {
    /// Parse a JSON document.
    ///
    /// # Errors
    /// [`Error::Config`] if the document is malformed, including invalid
    /// dates, months or days inside it.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Parse a JSON document and build the finder it describes.
    pub fn finder_from_json(json: &str) -> Result<Finder> {
        Finder::try_from(Self::from_json(json)?)
    }
}

impl TryFrom<FinderConfig> for Finder {
    type Error = Error;

    fn try_from(config: FinderConfig) -> Result<Self> {
        Finder::with_settings(
            config.standard_workdays,
            config.preferred_workdays,
            config.preferred_calendar,
            config.excluded_dates,
            config.algorithm,
            FinderSettings::default().with_iteration_limit(config.iteration_limit),
        )
    }
}

impl Finder {
    /// Describe this finder as a [`FinderConfig`].
    ///
    /// The exclusion list is always written out, so a finder that fell back
    /// to its default exclusions reproduces them explicitly.
    pub fn to_config(&self) -> FinderConfig {
        FinderConfig {
            standard_workdays: self.standard_workdays(),
            preferred_workdays: self.preferred_workdays(),
            preferred_calendar: self.preferred_calendar().copied(),
            excluded_dates: Some(self.excluded_dates()),
            algorithm: self.algorithm(),
            iteration_limit: self.settings().iteration_limit,
        }
    }
}

//! Per-finder search settings.
//!
//! [`FinderSettings`] carries the iteration limit that bounds every search and
//! the exclusion list a finder falls back to when none is supplied.  Each
//! finder owns its own copy, so two finders never influence each other.

use sf_core::ensure;
use sf_core::errors::Result;
use sf_time::Date;

/// Iteration budget granted to each search when none is configured.
pub const DEFAULT_ITERATION_LIMIT: usize = 10_000;

/// Search settings owned by a [`Finder`](crate::Finder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderSettings {
    /// Maximum number of search steps per call.
    pub iteration_limit: usize,
    /// Dates excluded when a finder is built without its own exclusion list.
    pub default_excluded_dates: Vec<Date>,
}

impl Default for FinderSettings {
    fn default() -> Self {
        Self {
            iteration_limit: DEFAULT_ITERATION_LIMIT,
            default_excluded_dates: Vec::new(),
        }
    }
}

impl FinderSettings {
    /// Replace the iteration limit.
    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = limit;
        self
    }

    /// Replace the default exclusion list.
    pub fn with_default_excluded_dates<I: IntoIterator<Item = Date>>(mut self, dates: I) -> Self {
        self.default_excluded_dates = dates.into_iter().collect();
        self
    }

    /// Reject settings no search could run under.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.iteration_limit > 0, "the iteration limit must be positive");
        Ok(())
    }
}

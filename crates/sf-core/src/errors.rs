//! Error types for schedule-finder.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  Configuration checks use
//! the [`ensure!`](crate::ensure) convenience macro.

use thiserror::Error;

/// The top-level error type used throughout schedule-finder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A finder, calendar, or timer was constructed with contradictory or
    /// empty settings.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A bounded date search ran out of iterations before finding a date.
    ///
    /// This signals a configuration that can never satisfy the requested
    /// constraints, such as a preferred calendar date that never falls on a
    /// standard workday.
    #[error(
        "the iteration limit ({limit}) was reached while searching for a date; \
         check the schedule configuration"
    )]
    IterationLimitExceeded {
        /// The budget that was exhausted.
        limit: usize,
    },

    /// A supplied date string or timestamp could not be interpreted.
    #[error("invalid date input: {0}")]
    InvalidDateInput(String),

    /// Date arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// A serialised configuration document is malformed.
    #[error("configuration document error: {0}")]
    Config(String),
}

/// Shorthand `Result` type used throughout schedule-finder.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidConfiguration(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use sf_core::{ensure, errors::Error};
/// fn positive(limit: usize) -> sf_core::errors::Result<usize> {
///     ensure!(limit > 0, "limit must be positive, got {limit}");
///     Ok(limit)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(0), Err(Error::InvalidConfiguration(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidConfiguration(
                format!($($msg)*)
            ));
        }
    };
}

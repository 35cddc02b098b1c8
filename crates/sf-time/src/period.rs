//! `Period`: how far apart two occurrences of an [`IntervalTimer`] are.
//!
//! [`IntervalTimer`]: crate::IntervalTimer

use crate::time_unit::TimeUnit;
use sf_core::errors::{Error, Result};

/// A count of [`TimeUnit`]s, written compactly as `5D`, `2W`, `3M` or `1Y`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    /// Number of units.
    pub length: i32,
    /// The unit of time.
    pub unit: TimeUnit,
}

impl Period {
    /// Create a new period.
    pub fn new(length: i32, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// Count weeks as days; other units are unchanged.
    ///
    /// # Errors
    /// [`Error::InvalidConfiguration`] if the length in days overflows.
    pub fn normalized(self) -> Result<Self> {
        match self.unit {
            TimeUnit::Weeks => self
                .length
                .checked_mul(7)
                .map(|days| Period::new(days, TimeUnit::Days))
                .ok_or_else(|| Error::InvalidConfiguration(format!("period {self} is too long"))),
            _ => Ok(self),
        }
    }
}

impl std::str::FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || Error::InvalidConfiguration(format!("cannot parse {s:?} as a period"));
        let unit = s
            .chars()
            .last()
            .and_then(TimeUnit::from_abbreviation)
            .ok_or_else(invalid)?;
        let length = s[..s.len() - 1].parse().map_err(|_| invalid())?;
        Ok(Period::new(length, unit))
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.length, self.unit.abbreviation())
    }
}

impl std::fmt::Debug for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Period({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_notation() {
        assert_eq!(Period::new(3, TimeUnit::Months).to_string(), "3M");
        assert_eq!("2w".parse::<Period>().unwrap(), Period::new(2, TimeUnit::Weeks));
        assert_eq!(" 10Y ".parse::<Period>().unwrap(), Period::new(10, TimeUnit::Years));
        for bad in ["", "M", "3", "3Q", "xD"] {
            assert!(bad.parse::<Period>().is_err(), "{bad:?}");
        }
    }

    #[test]
    fn weeks_normalize_to_days() {
        assert_eq!(
            Period::new(2, TimeUnit::Weeks).normalized().unwrap(),
            Period::new(14, TimeUnit::Days)
        );
        assert_eq!(
            Period::new(1, TimeUnit::Years).normalized().unwrap(),
            Period::new(1, TimeUnit::Years)
        );
        let huge: Period = "400000000W".parse().unwrap();
        assert!(matches!(huge.normalized(), Err(Error::InvalidConfiguration(_))));
    }
}

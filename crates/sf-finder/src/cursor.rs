//! Per-call search state: the working date, the lower bound backward scans
//! may not cross, and the remaining iteration budget.

use sf_core::errors::{Error, Result};
use sf_time::Date;

/// A countdown of search steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Budget {
    limit: usize,
    remaining: usize,
}

impl Budget {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            limit,
            remaining: limit,
        }
    }

    /// Consume one step, failing once nothing is left.
    pub(crate) fn spend(&mut self) -> Result<()> {
        if self.remaining == 0 {
            tracing::warn!(limit = self.limit, "schedule search exhausted its iteration budget");
            return Err(Error::IterationLimitExceeded { limit: self.limit });
        }
        self.remaining -= 1;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn remaining(&self) -> usize {
        self.remaining
    }
}

/// Mutable state threaded through one `next`/`closest` call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchCursor {
    pub(crate) date: Date,
    pub(crate) not_before: Date,
    budget: Budget,
}

impl SearchCursor {
    pub(crate) fn new(date: Date, not_before: Date, limit: usize) -> Self {
        Self {
            date,
            not_before,
            budget: Budget::new(limit),
        }
    }

    pub(crate) fn spend(&mut self) -> Result<()> {
        self.budget.spend()
    }

    /// Walk down from the working date to `not_before` and return the first
    /// date `accept` admits.  The working date itself is left untouched.
    pub(crate) fn scan_backward(&mut self, accept: impl Fn(Date) -> bool) -> Result<Option<Date>> {
        let mut date = self.date;
        while date >= self.not_before {
            self.budget.spend()?;
            if accept(date) {
                return Ok(Some(date));
            }
            match date.previous_day() {
                Ok(previous) => date = previous,
                Err(_) => break,
            }
        }
        Ok(None)
    }

    /// Move the working date forward until `accept` admits it.
    pub(crate) fn scan_forward(&mut self, accept: impl Fn(Date) -> bool) -> Result<()> {
        loop {
            self.budget.spend()?;
            if accept(self.date) {
                return Ok(());
            }
            self.date = self.date.next_day()?;
        }
    }

    /// Step one day past `origin` and make that the new lower bound.
    pub(crate) fn restart_after(&mut self, origin: Date) -> Result<()> {
        self.date = origin.next_day()?;
        self.not_before = self.date;
        Ok(())
    }
}

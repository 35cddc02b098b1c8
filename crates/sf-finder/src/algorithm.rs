//! `ScheduleAlgorithm`: the policy used when a date does not qualify as-is.

use serde::{Deserialize, Serialize};

/// How the finder resolves a preferred date that is not available.
///
/// *Closest* policies look backward first (never crossing the caller's
/// earliest date) and fall forward when nothing earlier qualifies.  *Next*
/// policies search forward first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScheduleAlgorithm {
    /// Nearest earlier preferred workday if available, else the nearest
    /// earlier available day, else
    /// [`NextPreferredThenClosestStandardWorkday`](Self::NextPreferredThenClosestStandardWorkday).
    #[default]
    ClosestPreferredThenClosestStandardWorkday,
    /// Nearest earlier available day, else
    /// [`NextStandardWorkday`](Self::NextStandardWorkday).
    ClosestStandardWorkday,
    /// Nearest earlier preferred workday if available, else the nearest
    /// earlier available day, else
    /// [`NextPreferredWorkday`](Self::NextPreferredWorkday).
    ClosestPreferredWorkday,
    /// Next preferred workday if available, else
    /// [`ClosestStandardWorkday`](Self::ClosestStandardWorkday) from there.
    NextPreferredThenClosestStandardWorkday,
    /// Next available day.
    NextStandardWorkday,
    /// Next day that is both available and a preferred workday.
    NextPreferredWorkday,
    /// Next available preferred calendar date (or preferred workday when no
    /// calendar is configured).
    OnlyPreferredDates,
}

impl ScheduleAlgorithm {
    /// Every algorithm, default first.
    pub const ALL: [ScheduleAlgorithm; 7] = [
        ScheduleAlgorithm::ClosestPreferredThenClosestStandardWorkday,
        ScheduleAlgorithm::ClosestStandardWorkday,
        ScheduleAlgorithm::ClosestPreferredWorkday,
        ScheduleAlgorithm::NextPreferredThenClosestStandardWorkday,
        ScheduleAlgorithm::NextStandardWorkday,
        ScheduleAlgorithm::NextPreferredWorkday,
        ScheduleAlgorithm::OnlyPreferredDates,
    ];

    /// The policy that takes over when this one cannot settle on a date.
    pub fn fallback(self) -> Option<ScheduleAlgorithm> {
        use ScheduleAlgorithm::*;
        match self {
            ClosestPreferredThenClosestStandardWorkday => {
                Some(NextPreferredThenClosestStandardWorkday)
            }
            ClosestStandardWorkday => Some(NextStandardWorkday),
            ClosestPreferredWorkday => Some(NextPreferredWorkday),
            NextPreferredThenClosestStandardWorkday => Some(ClosestStandardWorkday),
            OnlyPreferredDates => Some(NextStandardWorkday),
            NextStandardWorkday | NextPreferredWorkday => None,
        }
    }

    /// Return `true` if neither the policy nor any of its fallbacks scans
    /// backward, so its result never precedes the starting date even when an
    /// earlier bound is supplied.
    pub fn is_forward_only(self) -> bool {
        matches!(
            self,
            ScheduleAlgorithm::NextStandardWorkday
                | ScheduleAlgorithm::NextPreferredWorkday
                | ScheduleAlgorithm::OnlyPreferredDates
        )
    }

    /// The variant name.
    pub fn name(self) -> &'static str {
        match self {
            ScheduleAlgorithm::ClosestPreferredThenClosestStandardWorkday => {
                "ClosestPreferredThenClosestStandardWorkday"
            }
            ScheduleAlgorithm::ClosestStandardWorkday => "ClosestStandardWorkday",
            ScheduleAlgorithm::ClosestPreferredWorkday => "ClosestPreferredWorkday",
            ScheduleAlgorithm::NextPreferredThenClosestStandardWorkday => {
                "NextPreferredThenClosestStandardWorkday"
            }
            ScheduleAlgorithm::NextStandardWorkday => "NextStandardWorkday",
            ScheduleAlgorithm::NextPreferredWorkday => "NextPreferredWorkday",
            ScheduleAlgorithm::OnlyPreferredDates => "OnlyPreferredDates",
        }
    }
}

impl std::fmt::Display for ScheduleAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

//! Configuration for week navigation.

use crate::date::CalendarDate;

/// How a week entry is matched against the start date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StartMatch {
    /// Day, month and year must all match.
    #[default]
    FullDate,
    /// Only the day of the month must match, so the 10th of every month is
    /// flagged for a navigator started on a 10th.
    DayOfMonth,
}

impl StartMatch {
    /// Returns `true` if `date` counts as the start date under this rule.
    pub fn matches(self, date: &CalendarDate, start: &CalendarDate) -> bool {
        match self {
            StartMatch::FullDate => date.same_day(start),
            StartMatch::DayOfMonth => date.day == start.day,
        }
    }
}

/// Configuration for a [`WeeksNavigator`](crate::WeeksNavigator).
///
/// # Example
///
/// ```
/// use weeks_navigator::{NavigatorConfig, StartMatch};
///
/// let config = NavigatorConfig::new().with_start_match(StartMatch::DayOfMonth);
/// assert_eq!(config.start_match(), StartMatch::DayOfMonth);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigatorConfig {
    start_match: StartMatch,
}

impl NavigatorConfig {
    /// Creates a configuration with defaults (`start_match = FullDate`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how week entries are matched against the start date.
    pub fn with_start_match(mut self, start_match: StartMatch) -> Self {
        self.start_match = start_match;
        self
    }

    pub fn start_match(&self) -> StartMatch {
        self.start_match
    }
}

//! Calendar source for bookkeeping dates and date-bucket filters

use chrono::NaiveDate;

/// Provides "today" to services that stamp or bucket leads
pub trait Clock: Send + Sync {
    /// Current calendar date
    fn today(&self) -> NaiveDate;
}

/// Clock pinned to one date, for tests and replays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

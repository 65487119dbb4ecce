//! Calendar source for backup file names.
//!
//! Backups are named after the local calendar day, so the service asks a
//! [`Clock`] for "today" rather than calling chrono directly.  Tests use
//! [`FixedClock`] to pin the date.

use chrono::{Local, NaiveDate};

/// Supplies the current local date.
pub trait Clock {
    /// Returns today's date in the local time zone.
    fn today(&self) -> NaiveDate;
}

/// The wall clock of the machine running the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_its_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid date");
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn test_system_clock_matches_local_date() {
        // Bracket the call so the test is stable across midnight.
        let before = Local::now().date_naive();
        let today = SystemClock.today();
        let after = Local::now().date_naive();
        assert!(before <= today && today <= after);
    }
}

//! Source of "today" for month defaults

use chrono::{Local, NaiveDate};
use shared::Month;

/// Supplies the current date
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;

    /// Calendar month containing today
    fn current_month(&self) -> Month {
        Month::from_date(self.today())
    }
}

/// Local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy)]
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
    fn test_fixed_clock_month() {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(clock.current_month().to_string(), "2024-02");
    }
}

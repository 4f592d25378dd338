//! Clock Port
//!
//! Injectable source of the current calendar day. The engine never reads
//! wall-clock time directly; every derivation that needs "today" receives
//! it through this trait so tests (and the CLI's `--today` override) can
//! pin the date.

use chrono::{Local, NaiveDate};

/// Source of the current local calendar day
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Production clock, reads the local system date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fixed clock for deterministic runs
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_pins_today() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let clock = FixedClock::new(day);
        assert_eq!(clock.today(), day);
        assert_eq!(clock.today(), day);
    }
}

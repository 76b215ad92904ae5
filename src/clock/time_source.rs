// SPDX-License-Identifier: MPL-2.0
//! Sources of wall-clock time.

use super::WallClockTime;

/// Supplies the current wall-clock time on demand.
pub trait TimeSource {
    fn now(&self) -> WallClockTime;
}

/// Local time from the platform clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> WallClockTime {
        WallClockTime::from_datetime(&chrono::Local::now())
    }
}

/// Always reports the same instant. Used by tests and benches.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub WallClockTime);

impl TimeSource for FixedClock {
    fn now(&self) -> WallClockTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_instant() {
        let instant = WallClockTime::at(2024, 5, 1, 12, 30, 0).unwrap();
        assert_eq!(FixedClock(instant).now(), instant);
    }

    #[test]
    fn system_clock_fields_are_in_range() {
        let now = SystemClock.now();
        assert!(now.hour < 24);
        assert!(now.minute < 60);
        assert!(now.second < 60);
        assert!(now.weekday < 7);
        assert!(now.month < 12);
        assert!((1..=31).contains(&now.day));
    }
}

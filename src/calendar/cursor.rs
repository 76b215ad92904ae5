// SPDX-License-Identifier: MPL-2.0
//! Month displayed by the mini calendar.

use super::{build_month_grid, DayCell};
use chrono::{Datelike, NaiveDate};

/// A year and zero-based month.
///
/// # Example
///
/// ```
/// use showcase_clock::calendar::MonthCursor;
///
/// let january = MonthCursor::new(2027, 0).unwrap();
/// assert_eq!(january.previous(), MonthCursor::new(2026, 11).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthCursor {
    year: i32,
    month0: u32,
}

impl MonthCursor {
    /// Returns `None` when `month0` is not in 0–11.
    #[must_use]
    pub fn new(year: i32, month0: u32) -> Option<Self> {
        (month0 < 12).then_some(Self { year, month0 })
    }

    /// The month containing `date`.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn month0(self) -> u32 {
        self.month0
    }

    #[must_use]
    pub fn previous(self) -> Self {
        if self.month0 == 0 {
            Self {
                year: self.year - 1,
                month0: 11,
            }
        } else {
            Self {
                year: self.year,
                month0: self.month0 - 1,
            }
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        if self.month0 == 11 {
            Self {
                year: self.year + 1,
                month0: 0,
            }
        } else {
            Self {
                year: self.year,
                month0: self.month0 + 1,
            }
        }
    }

    /// Grid cells for this month, flagging `today` when it falls inside.
    #[must_use]
    pub fn grid(self, today: NaiveDate) -> Vec<DayCell> {
        build_month_grid(self.year, self.month0, today)
    }
}

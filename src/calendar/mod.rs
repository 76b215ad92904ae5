// SPDX-License-Identifier: MPL-2.0
//! Mini calendar month grid.
//!
//! [`build_month_grid`] produces the cells of one month laid out for a
//! 7-column, Sunday-first grid. The day-name header row is separate, see
//! [`weekday_header`].

mod cursor;

pub use cursor::MonthCursor;

use crate::clock::DateTimeFormatter;
use chrono::{Datelike, NaiveDate};

/// Number of columns in the calendar grid.
pub const DAYS_PER_WEEK: usize = 7;

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    /// Padding before the 1st of the month.
    Blank,
    Day { number: u32, is_today: bool },
}

impl DayCell {
    #[must_use]
    pub fn is_today(&self) -> bool {
        matches!(self, DayCell::Day { is_today: true, .. })
    }

    /// Day of month, `None` for blanks.
    #[must_use]
    pub fn number(&self) -> Option<u32> {
        match self {
            DayCell::Blank => None,
            DayCell::Day { number, .. } => Some(*number),
        }
    }
}

/// Builds the cells for `month0` (0–11) of `year`.
///
/// Leading blanks equal the weekday of the 1st (0 = Sunday). The month
/// length comes from date arithmetic: the last day is the day before the
/// 1st of the following month, so leap years need no special case.
///
/// Out-of-range input is outside the contract and yields an empty grid.
#[must_use]
pub fn build_month_grid(year: i32, month0: u32, today: NaiveDate) -> Vec<DayCell> {
    let Some(first) = month0
        .checked_add(1)
        .and_then(|month| NaiveDate::from_ymd_opt(year, month, 1))
    else {
        return Vec::new();
    };
    let Some(days) = days_in_month(first) else {
        return Vec::new();
    };

    let leading = first.weekday().num_days_from_sunday();
    let shows_today = today.year() == year && today.month0() == month0;

    let mut cells = Vec::with_capacity(leading as usize + days as usize);
    cells.extend((0..leading).map(|_| DayCell::Blank));
    cells.extend((1..=days).map(|number| DayCell::Day {
        number,
        is_today: shows_today && number == today.day(),
    }));
    cells
}

/// "Day 0 of next month": the day before the next month's 1st.
fn days_in_month(first: NaiveDate) -> Option<u32> {
    let next_first = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    }?;
    next_first.pred_opt().map(|last| last.day())
}

/// Localized short day names, Sunday first.
#[must_use]
pub fn weekday_header(formatter: &dyn DateTimeFormatter) -> Vec<String> {
    (0..7).map(|weekday| formatter.weekday_short(weekday)).collect()
}

/// Title shown above the grid, e.g. `October 2026`.
#[must_use]
pub fn month_title(cursor: MonthCursor, formatter: &dyn DateTimeFormatter) -> String {
    format!("{} {}", formatter.month_name(cursor.month0()), cursor.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn leading_blanks(cells: &[DayCell]) -> usize {
        cells.iter().take_while(|cell| **cell == DayCell::Blank).count()
    }

    #[test]
    fn leap_february_has_29_days() {
        let cells = build_month_grid(2024, 1, date(2000, 1, 1));
        // 2024-02-01 is a Thursday
        assert_eq!(leading_blanks(&cells), 4);
        assert_eq!(cells.len(), 4 + 29);
    }

    #[test]
    fn common_february_has_28_days() {
        let cells = build_month_grid(2023, 1, date(2000, 1, 1));
        // 2023-02-01 is a Wednesday
        assert_eq!(leading_blanks(&cells), 3);
        assert_eq!(cells.len(), 3 + 28);
    }

    #[test]
    fn century_rules_apply() {
        let february_1900 = build_month_grid(1900, 1, date(2000, 1, 1));
        let february_2000 = build_month_grid(2000, 1, date(2000, 1, 1));
        assert_eq!(february_1900.len() - leading_blanks(&february_1900), 28);
        assert_eq!(february_2000.len() - leading_blanks(&february_2000), 29);
    }

    #[test]
    fn month_starting_on_sunday_has_no_blanks() {
        // 2026-02-01 is a Sunday
        let cells = build_month_grid(2026, 1, date(2026, 2, 10));
        assert_eq!(leading_blanks(&cells), 0);
        assert_eq!(cells[0], DayCell::Day { number: 1, is_today: false });
    }

    #[test]
    fn december_rolls_into_next_year() {
        let cells = build_month_grid(2026, 11, date(2026, 12, 31));
        let days = cells.len() - leading_blanks(&cells);
        assert_eq!(days, 31);
        assert_eq!(cells.last(), Some(&DayCell::Day { number: 31, is_today: true }));
    }

    #[test]
    fn exactly_one_today_in_current_month() {
        let cells = build_month_grid(2026, 9, date(2026, 10, 15));
        let todays: Vec<_> = cells.iter().filter(|cell| cell.is_today()).collect();

        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].number(), Some(15));
    }

    #[test]
    fn no_today_when_month_or_year_differs() {
        let other_month = build_month_grid(2026, 8, date(2026, 10, 15));
        let other_year = build_month_grid(2025, 9, date(2026, 10, 15));

        assert!(other_month.iter().all(|cell| !cell.is_today()));
        assert!(other_year.iter().all(|cell| !cell.is_today()));
    }

    #[test]
    fn every_month_fits_the_documented_bounds() {
        for year in [1999, 2000, 2023, 2024, 2100] {
            for month0 in 0..12 {
                let cells = build_month_grid(year, month0, date(2024, 1, 1));
                let blanks = leading_blanks(&cells);
                let days = cells.len() - blanks;
                assert!(blanks < DAYS_PER_WEEK, "{year}-{month0}: {blanks} blanks");
                assert!((28..=31).contains(&days), "{year}-{month0}: {days} days");
                let numbers: Vec<u32> = cells.iter().filter_map(DayCell::number).collect();
                assert_eq!(numbers, (1..=days as u32).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn out_of_contract_month_yields_empty_grid() {
        assert!(build_month_grid(2024, 12, date(2024, 1, 1)).is_empty());
    }
}

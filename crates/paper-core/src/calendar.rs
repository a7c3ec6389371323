//! # Calendar Grid
//!
//! Builds the 42-cell month grid the date picker renders.
//!
//! ## Grid Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     March 2024 (Sunday-first)                           │
//! │                                                                         │
//! │   Su   Mo   Tu   We   Th   Fr   Sa                                      │
//! │  ┌────┬────┬────┬────┬────┬────┬────┐                                   │
//! │  │ 25 │ 26 │ 27 │ 28 │ 29 │  1 │  2 │ ◄── leading: tail of February     │
//! │  ├────┼────┼────┼────┼────┼────┼────┤                                   │
//! │  │  3 │  4 │  5 │  6 │  7 │  8 │  9 │                                   │
//! │  │ .. │ .. │ .. │ .. │ .. │ .. │ .. │ ◄── middle: every day of March   │
//! │  │ 31 │  1 │  2 │  3 │  4 │  5 │  6 │ ◄── trailing: head of April       │
//! │  └────┴────┴────┴────┴────┴────┴────┘                                   │
//! │                                                                         │
//! │  leading + middle + trailing = 42 (always six rows)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Purity
//! [`build_grid`] never reads the clock. "Today" is an argument, so the same
//! inputs always produce the same 42 cells.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{CoreError, CoreResult};
use crate::types::{CalendarCell, DateBounds, MonthCursor};
use crate::{DAYS_PER_WEEK, GRID_CELLS};

// =============================================================================
// Month Arithmetic
// =============================================================================

/// Gregorian leap year rule. Years outside chrono's range report `false`.
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 1, 1).is_some_and(|first| first.leap_year())
}

/// Number of days in a zero-based month.
///
/// ## Example
/// ```rust
/// use paper_core::calendar::days_in_month;
///
/// assert_eq!(days_in_month(2024, 1).unwrap(), 29); // February, leap year
/// assert_eq!(days_in_month(2023, 1).unwrap(), 28);
/// assert!(days_in_month(2023, 12).is_err());
/// ```
pub fn days_in_month(year: i32, month: u32) -> CoreResult<u32> {
    let cursor = MonthCursor::new(year, month)?;
    let first = cursor.first_day()?;
    let next = cursor.next().first_day()?;
    Ok(next.signed_duration_since(first).num_days() as u32)
}

/// Weekday of the first of the month, Sunday = 0 through Saturday = 6.
pub fn first_weekday_of_month(year: i32, month: u32) -> CoreResult<u32> {
    let first = MonthCursor::new(year, month)?.first_day()?;
    Ok(first.weekday().num_days_from_sunday())
}

// =============================================================================
// Grid Span
// =============================================================================

/// How the 42 cells split between the three months shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpan {
    /// Days borrowed from the end of the previous month.
    pub leading: usize,
    /// Days of the displayed month (28..=31).
    pub middle: usize,
    /// Days borrowed from the start of the next month.
    pub trailing: usize,
}

/// Computes the leading/middle/trailing split for a month.
pub fn grid_span(year: i32, month: u32) -> CoreResult<GridSpan> {
    let leading = first_weekday_of_month(year, month)? as usize;
    let middle = days_in_month(year, month)? as usize;
    Ok(GridSpan {
        leading,
        middle,
        trailing: GRID_CELLS - leading - middle,
    })
}

// =============================================================================
// Grid Builder
// =============================================================================

/// Builds the 42 cells for the displayed month.
///
/// ## Flags
/// - `is_current_month`: the day belongs to `month`
/// - `is_today`: only set on a current-month cell equal to `today`;
///   spillover cells never carry it
/// - `is_selected`: calendar-day equality with `selected`, on any cell
/// - `is_disabled`: outside `bounds`, on any cell
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use paper_core::calendar::build_grid;
/// use paper_core::DateBounds;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// let cells = build_grid(2024, 2, Some(today), DateBounds::unbounded(), today).unwrap();
///
/// assert_eq!(cells.len(), 42);
/// assert_eq!(cells[0].date, NaiveDate::from_ymd_opt(2024, 2, 25).unwrap());
/// assert!(cells.iter().any(|c| c.is_today && c.is_selected));
/// ```
pub fn build_grid(
    year: i32,
    month: u32,
    selected: Option<NaiveDate>,
    bounds: DateBounds,
    today: NaiveDate,
) -> CoreResult<Vec<CalendarCell>> {
    let cursor = MonthCursor::new(year, month)?;
    let out_of_range = CoreError::DateOutOfRange { year, month };

    let first = cursor.first_day()?;
    let leading = u64::from(first.weekday().num_days_from_sunday());
    let start = first
        .checked_sub_days(Days::new(leading))
        .ok_or_else(|| out_of_range.clone())?;

    let cells: Vec<CalendarCell> = start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| {
            let is_current_month = cursor.contains(date);
            CalendarCell {
                date,
                is_current_month,
                is_today: is_current_month && date == today,
                is_selected: selected == Some(date),
                is_disabled: bounds.is_disabled(date),
            }
        })
        .collect();

    // iter_days stops early at chrono's maximum date
    if cells.len() < GRID_CELLS {
        return Err(out_of_range);
    }

    Ok(cells)
}

/// The 1-based grid row a cell index sits on.
///
/// Shown in the leading column when week numbers are enabled. These label
/// the six rows of the grid, not ISO week numbers.
#[inline]
pub const fn week_row_number(index: usize) -> u32 {
    (index / DAYS_PER_WEEK + 1) as u32
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 0).unwrap(), 31);
        assert_eq!(days_in_month(2024, 1).unwrap(), 29);
        assert_eq!(days_in_month(1900, 1).unwrap(), 28);
        assert_eq!(days_in_month(2000, 1).unwrap(), 29);
        assert_eq!(days_in_month(2024, 3).unwrap(), 30);
        assert_eq!(days_in_month(2023, 11).unwrap(), 31);
        assert_eq!(days_in_month(2024, 12), Err(CoreError::InvalidMonth(12)));
    }

    #[test]
    fn test_first_weekday_of_month() {
        // 2024-03-01 is a Friday
        assert_eq!(first_weekday_of_month(2024, 2).unwrap(), 5);
        // 2015-02-01 is a Sunday
        assert_eq!(first_weekday_of_month(2015, 1).unwrap(), 0);
    }

    #[test]
    fn test_march_2024_layout() {
        let today = date(2024, 3, 5);
        let cells = build_grid(2024, 2, None, DateBounds::unbounded(), today).unwrap();

        assert_eq!(cells.len(), 42);
        assert_eq!(cells[0].date, date(2024, 2, 25));
        assert!(!cells[0].is_current_month);
        assert_eq!(cells[5].date, date(2024, 3, 1));
        assert!(cells[5].is_current_month);
        assert_eq!(cells[35].date, date(2024, 3, 31));
        assert_eq!(cells[36].date, date(2024, 4, 1));
        assert_eq!(cells[41].date, date(2024, 4, 6));

        let span = grid_span(2024, 2).unwrap();
        assert_eq!(
            span,
            GridSpan {
                leading: 5,
                middle: 31,
                trailing: 6
            }
        );
    }

    #[test]
    fn test_month_starting_on_sunday_has_no_leading_cells() {
        let cells = build_grid(2015, 1, None, DateBounds::unbounded(), date(2015, 2, 1)).unwrap();
        assert_eq!(cells[0].date, date(2015, 2, 1));
        assert!(cells[0].is_current_month);
        assert_eq!(grid_span(2015, 1).unwrap().trailing, 14);
    }

    #[test]
    fn test_today_only_flagged_on_current_month_cell() {
        // 2024-02-27 shows up as a leading cell in March 2024
        let today = date(2024, 2, 27);
        let cells = build_grid(2024, 2, None, DateBounds::unbounded(), today).unwrap();
        assert!(cells.iter().any(|c| c.date == today));
        assert!(cells.iter().all(|c| !c.is_today));

        let cells = build_grid(2024, 1, None, DateBounds::unbounded(), today).unwrap();
        assert_eq!(cells.iter().filter(|c| c.is_today).count(), 1);
    }

    #[test]
    fn test_selection_flagged_on_spillover_cell() {
        let selected = date(2024, 4, 2);
        let cells =
            build_grid(2024, 2, Some(selected), DateBounds::unbounded(), date(2024, 3, 5)).unwrap();
        let cell = cells.iter().find(|c| c.date == selected).unwrap();
        assert!(cell.is_selected);
        assert!(!cell.is_current_month);
        assert_eq!(cells.iter().filter(|c| c.is_selected).count(), 1);
    }

    #[test]
    fn test_bounds_disable_cells_outside_window() {
        let today = date(2024, 3, 5);
        let max = today + Days::new(30);
        let bounds = DateBounds::new(Some(today), Some(max));

        for cursor in [(2024, 1), (2024, 2), (2024, 3)] {
            let cells = build_grid(cursor.0, cursor.1, None, bounds, today).unwrap();
            for cell in cells {
                let expected = cell.date < today || cell.date > max;
                assert_eq!(cell.is_disabled, expected, "{}", cell.date);
            }
        }
    }

    #[test]
    fn test_invalid_month_rejected() {
        let today = date(2024, 3, 5);
        assert_eq!(
            build_grid(2024, 12, None, DateBounds::unbounded(), today),
            Err(CoreError::InvalidMonth(12))
        );
    }

    #[test]
    fn test_week_row_number() {
        assert_eq!(week_row_number(0), 1);
        assert_eq!(week_row_number(6), 1);
        assert_eq!(week_row_number(7), 2);
        assert_eq!(week_row_number(41), 6);
    }

    proptest! {
        #[test]
        fn prop_grid_always_has_42_cells(year in 1i32..=9999, month in 0u32..12) {
            let today = date(2024, 1, 1);
            let cells = build_grid(year, month, None, DateBounds::unbounded(), today).unwrap();
            prop_assert_eq!(cells.len(), GRID_CELLS);

            let span = grid_span(year, month).unwrap();
            prop_assert_eq!(span.leading + span.middle + span.trailing, GRID_CELLS);
            prop_assert!((28..=31).contains(&span.middle));
            prop_assert_eq!(cells.iter().filter(|c| c.is_current_month).count(), span.middle);
        }

        #[test]
        fn prop_each_day_appears_once_as_current_month(
            year in 1i32..=9999,
            month in 0u32..12,
            day in 1u32..=31,
        ) {
            let len = days_in_month(year, month).unwrap();
            let day = day.min(len);
            let target = date(year, month + 1, day);
            let cells = build_grid(year, month, None, DateBounds::unbounded(), target).unwrap();

            let hits = cells
                .iter()
                .filter(|c| c.is_current_month && c.date == target)
                .count();
            prop_assert_eq!(hits, 1);
            prop_assert!(cells.iter().filter(|c| c.is_today).count() <= 1);
        }

        #[test]
        fn prop_cells_are_consecutive_days(year in 1i32..=9999, month in 0u32..12) {
            let cells = build_grid(year, month, None, DateBounds::unbounded(), date(2024, 1, 1)).unwrap();
            for pair in cells.windows(2) {
                prop_assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
            }
            prop_assert_eq!(cells[0].date.weekday().num_days_from_sunday(), 0);
        }
    }
}

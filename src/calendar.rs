//! Month paging and grid layout for the loadshedding calendar.

use chrono::{Datelike, NaiveDate};

use crate::models::CalendarDay;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A (year, month) position in the calendar. The month is zero-based,
/// matching the grid math; the API path wants it one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month0: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month0: u32) -> Self {
        debug_assert!(month0 < 12);
        Self { year, month0 }
    }

    /// The month containing `today`
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::new(today.year(), today.month0())
    }

    /// Step by whole months, wrapping across year boundaries in either
    /// direction
    pub fn shifted(self, delta: i32) -> Self {
        let months = self.year * 12 + self.month0 as i32 + delta;
        Self {
            year: months.div_euclid(12),
            month0: months.rem_euclid(12) as u32,
        }
    }

    /// One-based month for API paths
    pub fn month1(self) -> u32 {
        self.month0 + 1
    }

    /// Heading such as "August 2026"
    pub fn label(self) -> String {
        format!("{} {}", MONTH_NAMES[self.month0 as usize], self.year)
    }

    fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month1(), 1)
    }

    /// Weekday of the first day of the month, 0 = Sunday
    pub fn first_weekday_offset(self) -> u32 {
        self.first_day()
            .map(|d| d.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// Number of days in the month, leap years included
    pub fn days_in_month(self) -> u32 {
        let next = self.shifted(1);
        match (self.first_day(), next.first_day()) {
            (Some(first), Some(next_first)) => (next_first - first).num_days() as u32,
            _ => 0,
        }
    }
}

/// One cell of the rendered month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    /// Leading filler before the first day of the month
    Blank,
    Day { day: u32, stage: Option<u32> },
}

/// Lay the month out as leading blanks followed by one cell per day,
/// each annotated with a stage when the API reports shedding for it.
pub fn month_grid(cursor: MonthCursor, shed_days: &[CalendarDay]) -> Vec<CalendarCell> {
    let offset = cursor.first_weekday_offset();
    let days = cursor.days_in_month();
    let mut cells = Vec::with_capacity((offset + days) as usize);

    for _ in 0..offset {
        cells.push(CalendarCell::Blank);
    }

    for day in 1..=days {
        let stage = shed_days
            .iter()
            .find(|d| d.day == day && d.has_shedding)
            .map(|d| d.stage);
        cells.push(CalendarCell::Day { day, stage });
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shifted_wraps_forward_across_year() {
        assert_eq!(
            MonthCursor::new(2024, 11).shifted(1),
            MonthCursor::new(2025, 0)
        );
    }

    #[test]
    fn test_shifted_wraps_backward_across_year() {
        assert_eq!(
            MonthCursor::new(2024, 0).shifted(-1),
            MonthCursor::new(2023, 11)
        );
    }

    #[test]
    fn test_repeated_single_steps_round_trip() {
        let start = MonthCursor::new(2026, 7);
        let mut cursor = start;
        for _ in 0..25 {
            cursor = cursor.shifted(1);
        }
        for _ in 0..25 {
            cursor = cursor.shifted(-1);
        }
        assert_eq!(cursor, start);
    }

    #[test]
    fn test_label() {
        assert_eq!(MonthCursor::new(2026, 7).label(), "August 2026");
        assert_eq!(MonthCursor::new(2024, 0).label(), "January 2024");
    }

    #[test]
    fn test_first_weekday_offset() {
        // 1 August 2026 is a Saturday
        assert_eq!(MonthCursor::new(2026, 7).first_weekday_offset(), 6);
        // 1 February 2026 is a Sunday
        assert_eq!(MonthCursor::new(2026, 1).first_weekday_offset(), 0);
    }

    #[test]
    fn test_days_in_month_handles_leap_years() {
        assert_eq!(MonthCursor::new(2024, 1).days_in_month(), 29);
        assert_eq!(MonthCursor::new(2026, 1).days_in_month(), 28);
        assert_eq!(MonthCursor::new(2026, 7).days_in_month(), 31);
        assert_eq!(MonthCursor::new(2026, 8).days_in_month(), 30);
    }

    #[test]
    fn test_month_grid_layout_and_annotations() {
        let shed = vec![
            CalendarDay {
                day: 3,
                has_shedding: true,
                stage: 2,
            },
            CalendarDay {
                day: 4,
                has_shedding: false,
                stage: 0,
            },
        ];

        // August 2026: 6 leading blanks, 31 days
        let cells = month_grid(MonthCursor::new(2026, 7), &shed);
        assert_eq!(cells.len(), 37);
        assert!(cells.len() <= 42);
        assert_eq!(&cells[..6], &[CalendarCell::Blank; 6]);
        assert_eq!(
            cells[6],
            CalendarCell::Day {
                day: 1,
                stage: None
            }
        );
        assert_eq!(
            cells[8],
            CalendarCell::Day {
                day: 3,
                stage: Some(2)
            }
        );
        // has_shedding = false means no annotation even with a stage field
        assert_eq!(
            cells[9],
            CalendarCell::Day {
                day: 4,
                stage: None
            }
        );
    }
}

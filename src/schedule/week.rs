//! Academic week parity.
//!
//! Both rules count weeks from 1 and call odd-numbered weeks [`WeekParity::Odd`]:
//!
//! | rule            | week 1 | week 2 | week 3 |
//! |-----------------|--------|--------|--------|
//! | semester start  | Odd    | Even   | Odd    |
//! | ISO-8601 week   | Odd    | Even   | Odd    |
//!
//! Upstream tags lessons with the digit `1` for odd weeks and `2` for even ones.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// One of the two alternating academic weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekParity {
    Odd,
    Even,
}

impl WeekParity {
    /// Parity of a 1-based week number.
    pub fn from_week_number(week: u32) -> Self {
        if week % 2 == 1 {
            WeekParity::Odd
        } else {
            WeekParity::Even
        }
    }

    /// The digit upstream uses in week tags.
    pub fn tag_digit(self) -> char {
        match self {
            WeekParity::Odd => '1',
            WeekParity::Even => '2',
        }
    }

    /// Adjective used in day headers ("нечётная неделя").
    pub fn label(self) -> &'static str {
        match self {
            WeekParity::Odd => "нечётная",
            WeekParity::Even => "чётная",
        }
    }
}

impl fmt::Display for WeekParity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parity of `date`.
///
/// Weeks are counted from `semester_start` when it is set and not after
/// `date`; otherwise the ISO-8601 week number is used.
pub fn week_parity(date: NaiveDate, semester_start: Option<NaiveDate>) -> WeekParity {
    if let Some(start) = semester_start {
        let diff_days = (date - start).num_days();
        if diff_days >= 0 {
            let week_index = diff_days / 7;
            return WeekParity::from_week_number((week_index % 2 + 1) as u32);
        }
    }
    WeekParity::from_week_number(date.iso_week().week())
}

/// Week-parity rule configured for this deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekCalendar {
    pub semester_start: Option<NaiveDate>,
}

impl WeekCalendar {
    pub fn new(semester_start: Option<NaiveDate>) -> Self {
        Self { semester_start }
    }

    pub fn parity_of(&self, date: NaiveDate) -> WeekParity {
        week_parity(date, self.semester_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_semester_truth_table() {
        let start = Some(date(2024, 9, 2));
        assert_eq!(week_parity(date(2024, 9, 2), start), WeekParity::Odd); // diff 0
        assert_eq!(week_parity(date(2024, 9, 8), start), WeekParity::Odd); // diff 6
        assert_eq!(week_parity(date(2024, 9, 9), start), WeekParity::Even); // diff 7
        assert_eq!(week_parity(date(2024, 9, 15), start), WeekParity::Even); // diff 13
        assert_eq!(week_parity(date(2024, 9, 16), start), WeekParity::Odd); // diff 14
    }

    #[test]
    fn test_before_semester_start_falls_back_to_iso() {
        let start = Some(date(2024, 9, 2));
        // 2024-08-26 is in ISO week 35
        assert_eq!(week_parity(date(2024, 8, 26), start), WeekParity::Odd);
        assert_eq!(
            week_parity(date(2024, 8, 26), start),
            week_parity(date(2024, 8, 26), None)
        );
    }

    #[test]
    fn test_iso_truth_table() {
        // 2024-01-01 is Monday of ISO week 1
        assert_eq!(week_parity(date(2024, 1, 1), None), WeekParity::Odd);
        assert_eq!(week_parity(date(2024, 1, 7), None), WeekParity::Odd);
        assert_eq!(week_parity(date(2024, 1, 8), None), WeekParity::Even);
    }

    #[test]
    fn test_iso_year_boundary() {
        // 2020 has 53 ISO weeks; 2021-01-03 still belongs to week 53
        assert_eq!(week_parity(date(2021, 1, 3), None), WeekParity::Odd);
        assert_eq!(week_parity(date(2021, 1, 4), None), WeekParity::Odd);
        // 2024-12-30 is Monday of ISO week 1 of 2025
        assert_eq!(week_parity(date(2024, 12, 30), None), WeekParity::Odd);
        assert_eq!(week_parity(date(2024, 12, 29), None), WeekParity::Even);
    }

    #[test]
    fn test_tag_digit_matches_numbering() {
        assert_eq!(WeekParity::Odd.tag_digit(), '1');
        assert_eq!(WeekParity::Even.tag_digit(), '2');
        assert_eq!(WeekParity::from_week_number(1), WeekParity::Odd);
        assert_eq!(WeekParity::from_week_number(52), WeekParity::Even);
    }

    #[test]
    fn test_calendar_uses_semester_start() {
        let calendar = WeekCalendar::new(Some(date(2024, 9, 3)));
        // ISO week 36 would be even; the semester rule makes it week 1
        assert_eq!(calendar.parity_of(date(2024, 9, 3)), WeekParity::Odd);
        assert_eq!(WeekCalendar::default().parity_of(date(2024, 9, 3)), WeekParity::Even);
    }
}

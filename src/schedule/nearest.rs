//! "Nearest lesson" lookup.
//!
//! The scan walks today and the six following days in order, filters each
//! day's lessons by that date's week parity and stops at the first match:
//! a lesson in progress, the next lesson later today, or the first lesson of
//! the next day that has any.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Timelike, Utc};

use crate::schedule::filter::filter_by_week;
use crate::schedule::models::{Lesson, Schedule};
use crate::schedule::week::WeekParity;
use crate::utils::datetime::monday_index;

/// Days examined, today included.
pub const LOOKAHEAD_DAYS: i64 = 7;

/// Outcome of [`find_nearest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NearestLesson {
    /// A lesson is running right now.
    Current {
        lesson: Lesson,
        day: usize,
        date: NaiveDate,
        minutes_elapsed: u32,
        minutes_left: u32,
    },
    /// The next lesson starts later today.
    UpcomingToday {
        lesson: Lesson,
        day: usize,
        date: NaiveDate,
        minutes_until_start: u32,
    },
    /// Nothing left today; this is the first lesson of a later day.
    UpcomingFutureDay {
        lesson: Lesson,
        day: usize,
        date: NaiveDate,
    },
    /// No applicable lesson within the lookahead window.
    NotFound,
}

impl NearestLesson {
    pub fn lesson(&self) -> Option<&Lesson> {
        match self {
            NearestLesson::Current { lesson, .. }
            | NearestLesson::UpcomingToday { lesson, .. }
            | NearestLesson::UpcomingFutureDay { lesson, .. } => Some(lesson),
            NearestLesson::NotFound => None,
        }
    }
}

/// Finds the most relevant lesson relative to `now`.
///
/// `offset` is the civil timezone the timetable is written in; `parity_of`
/// maps a local date to its academic week parity.
pub fn find_nearest<F>(
    schedule: &Schedule,
    now: DateTime<Utc>,
    offset: FixedOffset,
    parity_of: F,
) -> NearestLesson
where
    F: Fn(NaiveDate) -> WeekParity,
{
    let local = now.with_timezone(&offset);
    let today = local.date_naive();
    let now_minutes = local.hour() * 60 + local.minute();

    for day_offset in 0..LOOKAHEAD_DAYS {
        let date = today + Duration::days(day_offset);
        let day = monday_index(date);

        let mut lessons = filter_by_week(schedule.lessons_on(day), parity_of(date));
        if lessons.is_empty() {
            continue;
        }
        lessons.sort_by_key(|lesson| lesson.start_minutes());

        if day_offset > 0 {
            return NearestLesson::UpcomingFutureDay {
                lesson: lessons[0].clone(),
                day,
                date,
            };
        }

        if let Some(found) = scan_today(&lessons, day, date, now_minutes) {
            return found;
        }
    }

    NearestLesson::NotFound
}

/// First running or upcoming lesson among today's lessons, sorted by start.
fn scan_today(
    lessons: &[&Lesson],
    day: usize,
    date: NaiveDate,
    now_minutes: u32,
) -> Option<NearestLesson> {
    for lesson in lessons {
        let start = lesson.start_minutes();
        let end = lesson.end_minutes();

        if end < now_minutes {
            continue;
        }
        if start <= now_minutes && now_minutes < end {
            return Some(NearestLesson::Current {
                lesson: (*lesson).clone(),
                day,
                date,
                minutes_elapsed: now_minutes - start,
                minutes_left: end - now_minutes,
            });
        }
        if start > now_minutes {
            return Some(NearestLesson::UpcomingToday {
                lesson: (*lesson).clone(),
                day,
                date,
                minutes_until_start: start - now_minutes,
            });
        }
        // ends exactly now
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::models::DaySchedule;

    fn lesson(name: &str, start: Option<&str>, end: Option<&str>) -> Lesson {
        Lesson {
            name: Some(name.to_string()),
            start_time: start.map(str::to_string),
            end_time: end.map(str::to_string),
            ..Lesson::default()
        }
    }

    fn schedule_with(day: usize, lessons: Vec<Lesson>) -> Schedule {
        let mut schedule = Schedule::default();
        schedule.days.insert(
            day.to_string(),
            DaySchedule {
                name: None,
                lessons,
            },
        );
        schedule
    }

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn msk() -> FixedOffset {
        FixedOffset::east_opt(3 * 3600).unwrap()
    }

    #[test]
    fn test_unsorted_lessons_are_resolved_in_time_order() {
        let schedule = schedule_with(
            0,
            vec![
                lesson("late", Some("13:40"), Some("15:10")),
                lesson("early", Some("11:40"), Some("13:10")),
            ],
        );
        // Monday 2024-09-02 10:00 MSK
        let result = find_nearest(&schedule, utc("2024-09-02T07:00:00Z"), msk(), |_| WeekParity::Odd);
        assert_eq!(result.lesson().and_then(|l| l.title()), Some("early"));
    }

    #[test]
    fn test_first_running_lesson_wins_over_later_overlap() {
        let schedule = schedule_with(
            0,
            vec![
                lesson("long", Some("09:00"), Some("12:00")),
                lesson("short", Some("10:00"), Some("11:00")),
            ],
        );
        let result = find_nearest(&schedule, utc("2024-09-02T07:30:00Z"), msk(), |_| WeekParity::Odd);
        assert_eq!(
            result,
            NearestLesson::Current {
                lesson: lesson("long", Some("09:00"), Some("12:00")),
                day: 0,
                date: NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
                minutes_elapsed: 90,
                minutes_left: 90,
            }
        );
    }

    #[test]
    fn test_lesson_ending_exactly_now_is_passed_over() {
        let schedule = schedule_with(
            0,
            vec![
                lesson("first", Some("09:00"), Some("10:00")),
                lesson("second", Some("10:15"), Some("11:00")),
            ],
        );
        let result = find_nearest(&schedule, utc("2024-09-02T07:00:00Z"), msk(), |_| WeekParity::Odd);
        assert!(matches!(
            result,
            NearestLesson::UpcomingToday { minutes_until_start: 15, .. }
        ));
    }

    #[test]
    fn test_missing_times_span_the_whole_day() {
        let schedule = schedule_with(0, vec![lesson("untimed", None, None)]);
        let result = find_nearest(&schedule, utc("2024-09-02T15:00:00Z"), msk(), |_| WeekParity::Odd);
        assert!(matches!(
            result,
            NearestLesson::Current { minutes_elapsed: 1080, minutes_left: 359, .. }
        ));
    }

    #[test]
    fn test_offset_moves_today_forward() {
        // 22:30 UTC Sunday is already 01:30 Monday in Moscow
        let schedule = schedule_with(0, vec![lesson("monday", Some("09:00"), Some("10:30"))]);
        let result = find_nearest(&schedule, utc("2024-09-01T22:30:00Z"), msk(), |_| WeekParity::Odd);
        assert!(matches!(
            result,
            NearestLesson::UpcomingToday { day: 0, minutes_until_start: 450, .. }
        ));
    }

    #[test]
    fn test_empty_schedule_is_not_found() {
        let result = find_nearest(&Schedule::default(), Utc::now(), msk(), |_| WeekParity::Even);
        assert_eq!(result, NearestLesson::NotFound);
        assert!(result.lesson().is_none());
    }
}

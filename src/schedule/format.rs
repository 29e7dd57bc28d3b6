//! Plain-text rendering of lessons, exams and lookup results.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};

use crate::schedule::filter::filter_by_week;
use crate::schedule::models::{Exam, Lesson};
use crate::schedule::nearest::NearestLesson;
use crate::schedule::week::WeekParity;
use crate::utils::datetime::{clock_to_minutes, day_name, relative_day_label};

const MISSING: &str = "—";
const MISSING_CLOCK: &str = "??:??";

pub fn format_lesson(lesson: &Lesson) -> String {
    let start = lesson.start_time.as_deref().unwrap_or(MISSING_CLOCK);
    let end = lesson.end_time.as_deref().unwrap_or(MISSING_CLOCK);
    let kind = lesson
        .subject_type
        .as_deref()
        .map(|t| format!("{t}: "))
        .unwrap_or_default();
    let title = lesson.title().unwrap_or(MISSING);

    let teachers = lesson.teachers();
    let teachers = if teachers.is_empty() {
        MISSING.to_string()
    } else {
        teachers.join(", ")
    };
    let room = lesson.room.as_deref().unwrap_or(MISSING);

    format!("{start}–{end}  {kind}{title}\nПреподаватели: {teachers}\nАудитория: {room}")
}

fn exam_moment(exam: &Exam, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let ts = exam.timestamp?;
    DateTime::from_timestamp(ts, 0).map(|dt| dt.with_timezone(&offset))
}

/// Renders one exam; date and time fall back to `timestamp` in `offset`.
pub fn format_exam(exam: &Exam, offset: FixedOffset) -> String {
    let moment = exam_moment(exam, offset);
    let date = exam
        .date
        .clone()
        .or_else(|| moment.map(|m| m.format("%d.%m.%Y").to_string()))
        .unwrap_or_else(|| MISSING.to_string());
    let time = exam
        .start_time
        .clone()
        .or_else(|| moment.map(|m| m.format("%H:%M").to_string()))
        .unwrap_or_else(|| MISSING.to_string());
    let subject = exam.name.as_deref().unwrap_or(MISSING);
    let teachers = exam.teachers_line().unwrap_or_else(|| MISSING.to_string());
    let room = exam.room.as_deref().unwrap_or(MISSING);

    format!("— {subject}\n{date}, {time}\nПреподаватели: {teachers}\nАудитория: {room}")
}

fn parse_exam_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    if let Some(iso) = date.get(..10) {
        if let Ok(parsed) = NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(date, "%d.%m.%Y").ok()
}

/// Milliseconds since the epoch used to order exams; 0 when nothing parses.
///
/// `timestamp` wins; otherwise `date` (ISO or `dd.mm.yyyy`) and `start_time`
/// are read as civil time in `offset`. Both must be present.
pub fn exam_sort_key(exam: &Exam, offset: FixedOffset) -> i64 {
    if let Some(ts) = exam.timestamp {
        return ts.saturating_mul(1000);
    }
    let (Some(date), Some(time)) = (exam.date.as_deref(), exam.start_time.as_deref()) else {
        return 0;
    };
    let Some(date) = parse_exam_date(date) else {
        return 0;
    };
    let Some(minutes) = clock_to_minutes(time) else {
        return 0;
    };
    date.and_hms_opt(minutes / 60, minutes % 60, 0)
        .and_then(|naive| offset.from_local_datetime(&naive).single())
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

/// Stable ascending sort by [`exam_sort_key`].
pub fn sort_exams(exams: &mut [Exam], offset: FixedOffset) {
    exams.sort_by_key(|exam| exam_sort_key(exam, offset));
}

pub fn render_exams(exams: &[Exam], offset: FixedOffset) -> String {
    if exams.is_empty() {
        return "Расписание экзаменов не найдено для этой группы.".to_string();
    }
    let body: Vec<String> = exams.iter().map(|e| format_exam(e, offset)).collect();
    format!("📌 Расписание экзаменов:\n\n{}", body.join("\n\n"))
}

/// One weekday's timetable for the chosen week, lessons ordered by start.
pub fn render_day(day: usize, parity: WeekParity, lessons: &[Lesson]) -> String {
    let name = day_name(day);
    if lessons.is_empty() {
        return format!("— {name}: пар нет");
    }

    let mut applicable = filter_by_week(lessons, parity);
    if applicable.is_empty() {
        return format!("— {name}: пар нет (для выбранной недели)");
    }
    applicable.sort_by_key(|lesson| lesson.start_minutes());

    let body: Vec<String> = applicable.into_iter().map(format_lesson).collect();
    format!("— {name} ({parity} неделя)\n\n{}", body.join("\n\n"))
}

/// Text for a nearest-lesson result; `today` is the local date of the query.
pub fn render_nearest(result: &NearestLesson, today: NaiveDate) -> String {
    match result {
        NearestLesson::Current {
            lesson,
            day,
            date,
            minutes_elapsed,
            minutes_left,
        } => format!(
            "📍 Текущая пара (сейчас)\n{}, {}\nИдёт {minutes_elapsed} мин., до конца {minutes_left} мин.\n\n{}",
            relative_day_label(*date, today),
            day_name(*day),
            format_lesson(lesson)
        ),
        NearestLesson::UpcomingToday {
            lesson,
            day,
            date,
            minutes_until_start,
        } => format!(
            "📍 Ближайшая пара\n{}, {}\nНачало через {minutes_until_start} мин.\n\n{}",
            relative_day_label(*date, today),
            day_name(*day),
            format_lesson(lesson)
        ),
        NearestLesson::UpcomingFutureDay { lesson, day, date } => format!(
            "📍 Ближайшая пара\n{}, {}\n\n{}",
            relative_day_label(*date, today),
            day_name(*day),
            format_lesson(lesson)
        ),
        NearestLesson::NotFound => "Пар не найдено в ближайшую неделю".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msk() -> FixedOffset {
        FixedOffset::east_opt(3 * 3600).unwrap()
    }

    #[test]
    fn test_format_lesson_full() {
        let lesson = Lesson {
            start_time: Some("09:50".to_string()),
            end_time: Some("11:20".to_string()),
            name: Some("Физика".to_string()),
            subject_type: Some("Лек".to_string()),
            teacher: Some("Иванов И.И.".to_string()),
            second_teacher: Some("Петров П.П.".to_string()),
            room: Some("5427".to_string()),
            ..Lesson::default()
        };
        assert_eq!(
            format_lesson(&lesson),
            "09:50–11:20  Лек: Физика\nПреподаватели: Иванов И.И., Петров П.П.\nАудитория: 5427"
        );
    }

    #[test]
    fn test_format_lesson_placeholders() {
        assert_eq!(
            format_lesson(&Lesson::default()),
            "??:??–??:??  —\nПреподаватели: —\nАудитория: —"
        );
    }

    #[test]
    fn test_format_exam_from_timestamp() {
        let exam = Exam {
            name: Some("Матан".to_string()),
            // 2025-01-15 06:00 UTC
            timestamp: Some(1_736_920_800),
            ..Exam::default()
        };
        assert_eq!(
            format_exam(&exam, msk()),
            "— Матан\n15.01.2025, 09:00\nПреподаватели: —\nАудитория: —"
        );
    }

    #[test]
    fn test_exam_sort_key_variants() {
        let iso = Exam {
            date: Some("2025-01-15".to_string()),
            start_time: Some("09:00".to_string()),
            ..Exam::default()
        };
        let dotted = Exam {
            date: Some("15.01.2025".to_string()),
            start_time: Some("09:00".to_string()),
            ..Exam::default()
        };
        let stamped = Exam {
            timestamp: Some(1_736_920_800),
            ..Exam::default()
        };
        assert_eq!(exam_sort_key(&iso, msk()), 1_736_920_800_000);
        assert_eq!(exam_sort_key(&dotted, msk()), 1_736_920_800_000);
        assert_eq!(exam_sort_key(&stamped, msk()), 1_736_920_800_000);

        let no_time = Exam {
            date: Some("2025-01-15".to_string()),
            ..Exam::default()
        };
        assert_eq!(exam_sort_key(&no_time, msk()), 0);
        assert_eq!(exam_sort_key(&Exam::default(), msk()), 0);
    }

    #[test]
    fn test_render_day_variants() {
        assert_eq!(render_day(2, WeekParity::Odd, &[]), "— Среда: пар нет");

        let even_only = Lesson {
            week: Some("2".to_string()),
            ..Lesson::default()
        };
        assert_eq!(
            render_day(2, WeekParity::Odd, std::slice::from_ref(&even_only)),
            "— Среда: пар нет (для выбранной недели)"
        );
        assert!(render_day(2, WeekParity::Even, &[even_only]).starts_with("— Среда (чётная неделя)\n\n"));
    }

    #[test]
    fn test_render_not_found() {
        let today = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
        assert_eq!(
            render_nearest(&NearestLesson::NotFound, today),
            "Пар не найдено в ближайшую неделю"
        );
    }
}

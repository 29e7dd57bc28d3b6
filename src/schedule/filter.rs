use crate::schedule::models::Lesson;
use crate::schedule::week::WeekParity;

/// Tag fragments meaning "every week".
const ALL_WEEKS_MARKERS: [&str; 6] = ["all", "both", "вся", "все", "обе", "1/2"];

/// Returns true if a lesson with this week tag runs in a week of `parity`.
///
/// Untagged lessons and tags without a recognisable week digit are kept.
pub fn runs_in_week(tag: Option<&str>, parity: WeekParity) -> bool {
    let Some(tag) = tag else {
        return true;
    };
    let tag = tag.to_lowercase();
    if ALL_WEEKS_MARKERS.iter().any(|marker| tag.contains(marker)) {
        return true;
    }
    match tag.chars().find(|c| matches!(c, '1' | '2')) {
        Some(digit) => digit == parity.tag_digit(),
        None => true,
    }
}

/// Lessons that run in a week of `parity`, in their original order.
pub fn filter_by_week(lessons: &[Lesson], parity: WeekParity) -> Vec<&Lesson> {
    lessons
        .iter()
        .filter(|lesson| runs_in_week(lesson.week_tag(), parity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(name: &str, week: Option<&str>) -> Lesson {
        Lesson {
            name: Some(name.to_string()),
            week: week.map(str::to_string),
            ..Lesson::default()
        }
    }

    #[test]
    fn test_untagged_lessons_always_run() {
        assert!(runs_in_week(None, WeekParity::Odd));
        assert!(runs_in_week(None, WeekParity::Even));
    }

    #[test]
    fn test_digit_tags() {
        assert!(runs_in_week(Some("1"), WeekParity::Odd));
        assert!(!runs_in_week(Some("1"), WeekParity::Even));
        assert!(runs_in_week(Some("2"), WeekParity::Even));
        assert!(!runs_in_week(Some("2"), WeekParity::Odd));
        // only the first digit counts
        assert!(runs_in_week(Some("неделя 2, ауд. 1"), WeekParity::Even));
    }

    #[test]
    fn test_all_weeks_markers() {
        for tag in ["1/2", "ALL", "both", "Вся неделя", "обе недели"] {
            assert!(runs_in_week(Some(tag), WeekParity::Odd), "{tag}");
            assert!(runs_in_week(Some(tag), WeekParity::Even), "{tag}");
        }
    }

    #[test]
    fn test_unrecognised_tag_fails_open() {
        assert!(runs_in_week(Some("по выбору"), WeekParity::Odd));
        assert!(runs_in_week(Some("3"), WeekParity::Even));
    }

    #[test]
    fn test_filter_keeps_order() {
        let lessons = vec![
            tagged("a", Some("2")),
            tagged("b", None),
            tagged("c", Some("1")),
            tagged("d", Some("1/2")),
        ];
        let odd: Vec<_> = filter_by_week(&lessons, WeekParity::Odd)
            .into_iter()
            .filter_map(|l| l.title())
            .collect();
        assert_eq!(odd, vec!["b", "c", "d"]);
    }

    #[test]
    fn test_weeks_field_is_a_fallback() {
        let lesson = Lesson {
            weeks: Some("2".to_string()),
            ..Lesson::default()
        };
        assert_eq!(filter_by_week(std::slice::from_ref(&lesson), WeekParity::Odd).len(), 0);
        assert_eq!(filter_by_week(std::slice::from_ref(&lesson), WeekParity::Even).len(), 1);
    }
}

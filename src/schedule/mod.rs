//! Timetable records and the pure logic on top of them: week parity,
//! week filtering, the nearest-lesson lookup and text rendering.

pub mod filter;
pub mod format;
pub mod models;
pub mod nearest;
pub mod week;

pub use filter::filter_by_week;
pub use models::{DaySchedule, Exam, Group, Lesson, Schedule};
pub use nearest::{find_nearest, NearestLesson};
pub use week::{week_parity, WeekCalendar, WeekParity};

//! Records returned by the upstream schedule API.
//!
//! Upstream data is loosely typed: numbers show up where strings are expected,
//! fields go missing, arrays turn into `null`. Every optional field is an
//! `Option` and the custom deserializers below map anything unexpected to
//! `None` or an empty collection instead of failing the whole payload.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ScheduleError;
use crate::utils::datetime::{clock_to_minutes, END_OF_DAY_MINUTES};
use crate::utils::validation::validate_group_number;

/// A student cohort identifier, always exactly four ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Group(String);

impl Group {
    /// Validates user input and wraps it.
    pub fn parse(input: &str) -> Result<Self, ScheduleError> {
        let input = input.trim();
        validate_group_number(input)?;
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One scheduled class occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    #[serde(default, deserialize_with = "opt_text")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub subject: Option<String>,
    #[serde(default, rename = "subjectType", deserialize_with = "opt_text")]
    pub subject_type: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub teacher: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub second_teacher: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub room: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub week: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub weeks: Option<String>,
}

impl Lesson {
    /// Subject title, preferring `name` over `subject`.
    pub fn title(&self) -> Option<&str> {
        self.name.as_deref().or(self.subject.as_deref())
    }

    /// Week-applicability tag, preferring `week` over `weeks`.
    pub fn week_tag(&self) -> Option<&str> {
        self.week.as_deref().or(self.weeks.as_deref())
    }

    /// Start in minutes since midnight; missing or malformed means 00:00.
    pub fn start_minutes(&self) -> u32 {
        self.start_time
            .as_deref()
            .and_then(clock_to_minutes)
            .unwrap_or(0)
    }

    /// End in minutes since midnight; missing or malformed means 23:59.
    pub fn end_minutes(&self) -> u32 {
        self.end_time
            .as_deref()
            .and_then(clock_to_minutes)
            .unwrap_or(END_OF_DAY_MINUTES)
    }

    /// Both teachers, skipping absent ones.
    pub fn teachers(&self) -> Vec<&str> {
        [self.teacher.as_deref(), self.second_teacher.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Lessons of a single weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    #[serde(default, deserialize_with = "opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub lessons: Vec<Lesson>,
}

/// A group's weekly timetable, keyed by Monday-based day index ("0" … "6").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default, deserialize_with = "lenient_days")]
    pub days: BTreeMap<String, DaySchedule>,
}

impl Schedule {
    /// Parses an upstream group entry; anything malformed becomes an empty schedule.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    pub fn day(&self, index: usize) -> Option<&DaySchedule> {
        self.days.get(&index.to_string())
    }

    /// Lessons for a day index, empty when the day is missing.
    pub fn lessons_on(&self, index: usize) -> &[Lesson] {
        self.day(index).map(|d| d.lessons.as_slice()).unwrap_or(&[])
    }
}

/// One exam entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    #[serde(default, deserialize_with = "opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub timestamp: Option<i64>,
    #[serde(default, deserialize_with = "opt_text")]
    pub teacher: Option<String>,
    #[serde(default, rename = "secondTeacher", deserialize_with = "opt_text")]
    pub second_teacher: Option<String>,
    #[serde(default, deserialize_with = "text_list")]
    pub teachers: Vec<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub room: Option<String>,
}

impl Exam {
    /// Teacher line: the named pair if any, else the teacher list.
    pub fn teachers_line(&self) -> Option<String> {
        let pair: Vec<&str> = [self.teacher.as_deref(), self.second_teacher.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if !pair.is_empty() {
            return Some(pair.join(", "));
        }
        if !self.teachers.is_empty() {
            return Some(self.teachers.join(", "));
        }
        None
    }
}

/// Decodes every element of a JSON array that fits `T`, dropping the rest.
pub fn parse_lenient_seq<T: DeserializeOwned>(value: Value) -> Vec<T> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(value_to_text))
}

fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items.into_iter().filter_map(value_to_text).collect(),
        _ => Vec::new(),
    })
}

fn opt_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let ts = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
        }
        _ => None,
    };
    // 0 means "not set" upstream
    Ok(ts.filter(|ts| *ts != 0))
}

fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .map(parse_lenient_seq)
        .unwrap_or_default())
}

fn lenient_days<'de, D>(deserializer: D) -> Result<BTreeMap<String, DaySchedule>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Object(days)) => days
            .into_iter()
            .filter_map(|(key, day)| Some((key, serde_json::from_value(day).ok()?)))
            .collect(),
        _ => BTreeMap::new(),
    })
}

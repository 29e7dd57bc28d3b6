use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};

/// Last minute of a day, used when a lesson has no end time.
pub const END_OF_DAY_MINUTES: u32 = 23 * 60 + 59;

/// Russian weekday names, Monday first.
pub const DAY_NAMES: [&str; 7] = [
    "Понедельник",
    "Вторник",
    "Среда",
    "Четверг",
    "Пятница",
    "Суббота",
    "Воскресенье",
];

/// Builds the fixed civil offset the bot operates in.
pub fn utc_offset(hours: i32) -> Option<FixedOffset> {
    FixedOffset::east_opt(hours.checked_mul(3600)?)
}

/// Current wall-clock time in the given offset.
pub fn local_now(offset: FixedOffset) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&offset)
}

/// Calendar date of `now` in the given offset.
pub fn local_date(now: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    now.with_timezone(&offset).date_naive()
}

/// Parses an `HH:MM` clock string into minutes since midnight.
///
/// A missing minute part counts as `:00`. Anything unparsable yields `None`,
/// so callers pick their own default.
pub fn clock_to_minutes(clock: &str) -> Option<u32> {
    let mut parts = clock.trim().splitn(2, ':');
    let hours: u32 = parts.next()?.trim().parse().ok()?;
    let minutes: u32 = match parts.next() {
        Some(m) => m.trim().parse().ok()?,
        None => 0,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Monday-based weekday index (Monday = 0 … Sunday = 6).
pub fn monday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

/// Name of the weekday with the given Monday-based index.
pub fn day_name(index: usize) -> &'static str {
    DAY_NAMES.get(index).copied().unwrap_or("—")
}

/// Short label for a date relative to `today`: "Сегодня", "Завтра",
/// "Послезавтра", otherwise `dd.mm`.
pub fn relative_day_label(target: NaiveDate, today: NaiveDate) -> String {
    match (target - today).num_days() {
        0 => "Сегодня".to_string(),
        1 => "Завтра".to_string(),
        2 => "Послезавтра".to_string(),
        _ => target.format("%d.%m").to_string(),
    }
}

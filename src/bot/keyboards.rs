use teloxide::types::{KeyboardButton, KeyboardMarkup};

use crate::utils::datetime::DAY_NAMES;

pub const NEAREST: &str = "📍 Ближайшая пара";
pub const TODAY: &str = "📅 Сегодня";
pub const TOMORROW: &str = "📅 Завтра";
pub const WHOLE_WEEK: &str = "📘 Вся неделя";
pub const PICK_DAY: &str = "📆 День недели";
pub const EXAMS: &str = "📝 Экзамены";
pub const CHANGE_GROUP: &str = "🔄 Сменить группу";
pub const EVEN_WEEK: &str = "Чётная неделя";
pub const ODD_WEEK: &str = "Нечётная неделя";
pub const BACK: &str = "<< Назад";

/// Days offered by the day picker; Sunday has no classes.
pub const PICKABLE_DAYS: usize = 6;

fn markup(rows: Vec<Vec<&str>>) -> KeyboardMarkup {
    let rows = rows
        .into_iter()
        .map(|row| row.into_iter().map(KeyboardButton::new).collect::<Vec<_>>());
    KeyboardMarkup::new(rows).resize_keyboard(true)
}

pub fn main_menu() -> KeyboardMarkup {
    markup(vec![
        vec![NEAREST],
        vec![TODAY, TOMORROW],
        vec![WHOLE_WEEK, PICK_DAY],
        vec![EXAMS],
        vec![CHANGE_GROUP],
    ])
}

pub fn week_picker() -> KeyboardMarkup {
    markup(vec![vec![EVEN_WEEK, ODD_WEEK], vec![BACK]])
}

pub fn day_picker() -> KeyboardMarkup {
    let days = &DAY_NAMES[..PICKABLE_DAYS];
    let mut rows: Vec<Vec<&str>> = days.chunks(3).map(|chunk| chunk.to_vec()).collect();
    rows.push(vec![BACK]);
    markup(rows)
}

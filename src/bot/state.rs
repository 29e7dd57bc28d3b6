//! Per-chat state and the reply-keyboard menu vocabulary.

use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};

use crate::bot::keyboards;
use crate::schedule::{Group, WeekParity};
use crate::utils::datetime::DAY_NAMES;

/// Dialogue handle stored per chat id.
pub type ChatDialogue = Dialogue<ChatState, InMemStorage<ChatState>>;
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// What the bot remembers about a chat until restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatState {
    /// Group chosen by the user; `None` means the next text is a group number.
    pub group: Option<Group>,
    /// Day picked in the day picker, waiting for a week choice.
    pub selected_day: Option<usize>,
}

impl ChatState {
    pub fn with_group(group: Group) -> Self {
        Self {
            group: Some(group),
            selected_day: None,
        }
    }

    pub fn select_day(&self, day: usize) -> Self {
        Self {
            group: self.group.clone(),
            selected_day: Some(day),
        }
    }

    pub fn clear_selected_day(&self) -> Self {
        Self {
            group: self.group.clone(),
            selected_day: None,
        }
    }

    /// What a week choice should render right now.
    pub fn week_target(&self) -> WeekTarget {
        match self.selected_day {
            Some(day) => WeekTarget::Day(day),
            None => WeekTarget::WholeWeek,
        }
    }
}

/// Scope of a week-parity choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekTarget {
    Day(usize),
    WholeWeek,
}

/// Returns true for the "change group" button, which works in every state.
pub fn is_change_group(text: &str) -> bool {
    text.trim() == keyboards::CHANGE_GROUP
}

/// A button press that needs a selected group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Nearest,
    Today,
    Tomorrow,
    WholeWeek,
    PickDay,
    Exams,
    Back,
    Day(usize),
    Week(WeekParity),
    Unknown,
}

impl MenuAction {
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        match text {
            keyboards::NEAREST => MenuAction::Nearest,
            keyboards::TODAY => MenuAction::Today,
            keyboards::TOMORROW => MenuAction::Tomorrow,
            keyboards::WHOLE_WEEK => MenuAction::WholeWeek,
            keyboards::PICK_DAY => MenuAction::PickDay,
            keyboards::EXAMS => MenuAction::Exams,
            keyboards::BACK => MenuAction::Back,
            keyboards::EVEN_WEEK => MenuAction::Week(WeekParity::Even),
            keyboards::ODD_WEEK => MenuAction::Week(WeekParity::Odd),
            other => DAY_NAMES
                .iter()
                .position(|name| *name == other)
                .map_or(MenuAction::Unknown, MenuAction::Day),
        }
    }

    /// Name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            MenuAction::Nearest => "nearest",
            MenuAction::Today => "today",
            MenuAction::Tomorrow => "tomorrow",
            MenuAction::WholeWeek => "whole_week",
            MenuAction::PickDay => "pick_day",
            MenuAction::Exams => "exams",
            MenuAction::Back => "back",
            MenuAction::Day(_) => "day",
            MenuAction::Week(_) => "week",
            MenuAction::Unknown => "unknown",
        }
    }
}

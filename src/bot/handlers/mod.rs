pub mod menu;
pub mod message;

use chrono::{FixedOffset, NaiveDate};
use teloxide::{
    dispatching::{dialogue, dialogue::InMemStorage, UpdateHandler},
    prelude::*,
};

use crate::bot::commands::Command;
use crate::bot::state::{ChatDialogue, ChatState};
use crate::schedule::WeekCalendar;
use crate::services::gateway::ScheduleGateway;
use crate::utils::datetime::local_now;

/// Everything a handler needs besides the chat itself.
#[derive(Debug, Clone)]
pub struct BotContext {
    pub gateway: ScheduleGateway,
    pub calendar: WeekCalendar,
    pub offset: FixedOffset,
}

impl BotContext {
    pub fn new(gateway: ScheduleGateway, calendar: WeekCalendar, offset: FixedOffset) -> Self {
        Self {
            gateway,
            calendar,
            offset,
        }
    }

    /// Today's date in the bot's civil timezone.
    pub fn local_today(&self) -> NaiveDate {
        local_now(self.offset).date_naive()
    }
}

pub struct BotHandler {
    pub context: BotContext,
}

impl BotHandler {
    pub fn new(context: BotContext) -> Self {
        Self { context }
    }

    pub fn schema(&self) -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
        let ctx = self.context.clone();

        dialogue::enter::<Update, InMemStorage<ChatState>, ChatState, _>()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(message::command_handler),
            )
            .branch(Update::filter_message().endpoint(
                move |bot: Bot, msg: Message, dialogue: ChatDialogue, state: ChatState| {
                    let ctx = ctx.clone();
                    async move { menu::menu_handler(bot, msg, dialogue, state, ctx).await }
                },
            ))
    }
}

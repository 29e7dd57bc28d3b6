pub mod day;
pub mod exams;
pub mod group;
pub mod nearest;

use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::keyboards::main_menu;

/// Reply used whenever the schedule API could not be reached.
pub const UPSTREAM_FAILURE: &str = "Ошибка получения данных расписания.";

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Команды бота расписания:")]
pub enum Command {
    #[command(description = "Показать список команд")]
    Help,
    #[command(description = "Начать заново и выбрать группу")]
    Start,
}

/// Shows the main reply keyboard.
pub async fn send_menu(bot: &Bot, chat_id: ChatId) -> ResponseResult<()> {
    bot.send_message(chat_id, "Выбери команду:")
        .reply_markup(main_menu())
        .await?;
    Ok(())
}

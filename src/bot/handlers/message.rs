use teloxide::prelude::*;
use teloxide::types::KeyboardRemove;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::Command;
use crate::bot::state::{ChatDialogue, HandlerResult};
use crate::utils::logging::log_menu_start;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    dialogue: ChatDialogue,
) -> HandlerResult {
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);
    let username = msg.from().and_then(|u| u.username.as_deref()).unwrap_or("unknown");

    match cmd {
        Command::Help => {
            log_menu_start("/help", username, user_id, msg.chat.id.0, None);
            bot.send_message(msg.chat.id, Command::descriptions().to_string()).await?;
        }
        Command::Start => {
            log_menu_start("/start", username, user_id, msg.chat.id.0, None);
            dialogue.reset().await?;
            bot.send_message(
                msg.chat.id,
                "Здравствуй, лэтишник! Введи номер своей группы (4 цифры):",
            )
            .reply_markup(KeyboardRemove::new())
            .await?;
        }
    }
    Ok(())
}

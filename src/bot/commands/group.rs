use teloxide::prelude::*;
use teloxide::types::KeyboardRemove;

use crate::bot::commands::send_menu;
use crate::bot::handlers::BotContext;
use crate::bot::state::{ChatDialogue, ChatState, HandlerResult};
use crate::schedule::Group;
use crate::utils::feedback::{CommandFeedback, FeedbackType};
use crate::utils::logging::{log_menu_success, log_validation_error};

/// Handles free text while the chat has no group yet.
pub async fn register_group(
    bot: &Bot,
    chat_id: ChatId,
    user_id: i64,
    dialogue: &ChatDialogue,
    ctx: &BotContext,
    text: &str,
) -> HandlerResult {
    let feedback = CommandFeedback::new(bot.clone(), chat_id);

    let group = match Group::parse(text) {
        Ok(group) => group,
        Err(e) => {
            log_validation_error("group", text, &e.to_string(), user_id, chat_id.0);
            feedback
                .validation_error(
                    "Неверный формат номера группы. Номер должен содержать 4 цифры.",
                    "Введите снова, например: 3381",
                )
                .await?;
            return Ok(());
        }
    };

    let pending = feedback
        .send_processing(&format!("Проверяю группу {group}..."))
        .await?;

    if !ctx.gateway.verify_group(&group).await {
        feedback
            .update_message(
                pending.id,
                FeedbackType::Error,
                &format!("Группа \"{group}\" не найдена. Проверь номер и введи ещё раз:"),
            )
            .await?;
        return Ok(());
    }

    dialogue.update(ChatState::with_group(group.clone())).await?;
    feedback
        .update_message(pending.id, FeedbackType::Success, &format!("Группа сохранена: {group}"))
        .await?;
    log_menu_success("register_group", chat_id.0, Some(group.as_str()));
    send_menu(bot, chat_id).await?;
    Ok(())
}

/// Forgets the chat's group and asks for a new one.
pub async fn change_group(bot: &Bot, chat_id: ChatId, dialogue: &ChatDialogue) -> HandlerResult {
    dialogue.reset().await?;
    bot.send_message(chat_id, "Введи новый номер группы:")
        .reply_markup(KeyboardRemove::new())
        .await?;
    Ok(())
}

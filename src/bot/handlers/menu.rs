use chrono::Duration;
use teloxide::prelude::*;

use crate::bot::commands::{day, exams, group, nearest, send_menu};
use crate::bot::handlers::BotContext;
use crate::bot::keyboards::{day_picker, main_menu, week_picker};
use crate::bot::state::{
    is_change_group, ChatDialogue, ChatState, HandlerResult, MenuAction, WeekTarget,
};
use crate::utils::datetime::{day_name, monday_index};
use crate::utils::feedback::{CommandFeedback, FeedbackType};
use crate::utils::logging::log_menu_start;

/// Handles every non-command text message: group entry and menu buttons.
pub async fn menu_handler(
    bot: Bot,
    msg: Message,
    dialogue: ChatDialogue,
    state: ChatState,
    ctx: BotContext,
) -> HandlerResult {
    let Some(text) = msg.text().map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(());
    };
    let chat_id = msg.chat.id;
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);
    let username = msg.from().and_then(|u| u.username.as_deref()).unwrap_or("unknown");

    if text.starts_with('/') {
        let command = text.split_whitespace().next().unwrap_or(text);
        CommandFeedback::new(bot, chat_id)
            .validation_error(
                &format!("Неизвестная команда: {command}"),
                "Используй /help, чтобы увидеть список команд.",
            )
            .await?;
        return Ok(());
    }

    if is_change_group(text) {
        log_menu_start("change_group", username, user_id, chat_id.0, None);
        return group::change_group(&bot, chat_id, &dialogue).await;
    }

    let Some(selected) = state.group.clone() else {
        return group::register_group(&bot, chat_id, user_id, &dialogue, &ctx, text).await;
    };

    let action = MenuAction::parse(text);
    log_menu_start(action.name(), username, user_id, chat_id.0, Some(selected.as_str()));

    match action {
        MenuAction::Nearest => nearest::send_nearest(&bot, chat_id, &ctx, &selected).await?,
        MenuAction::Today | MenuAction::Tomorrow => {
            let shift = if action == MenuAction::Tomorrow { 1 } else { 0 };
            let date = ctx.local_today() + Duration::days(shift);
            day::send_day(
                &bot,
                chat_id,
                &ctx,
                &selected,
                monday_index(date),
                ctx.calendar.parity_of(date),
                true,
            )
            .await?;
        }
        MenuAction::WholeWeek => {
            dialogue.update(state.clear_selected_day()).await?;
            bot.send_message(chat_id, "Выбери тип недели для расписания на всю неделю:")
                .reply_markup(week_picker())
                .await?;
        }
        MenuAction::PickDay => {
            bot.send_message(chat_id, "Выбери день:")
                .reply_markup(day_picker())
                .await?;
        }
        MenuAction::Day(index) => {
            dialogue.update(state.select_day(index)).await?;
            bot.send_message(
                chat_id,
                format!("Выбран(а) {}. Теперь выбери тип недели:", day_name(index)),
            )
            .reply_markup(week_picker())
            .await?;
        }
        MenuAction::Week(parity) => match state.week_target() {
            WeekTarget::Day(index) => {
                let rendered =
                    day::send_day(&bot, chat_id, &ctx, &selected, index, parity, true).await?;
                if rendered {
                    dialogue.update(state.clear_selected_day()).await?;
                }
            }
            WeekTarget::WholeWeek => {
                day::send_week(&bot, chat_id, &ctx, &selected, parity).await?;
            }
        },
        MenuAction::Exams => exams::send_exams(&bot, chat_id, &ctx, &selected).await?,
        MenuAction::Back => send_menu(&bot, chat_id).await?,
        MenuAction::Unknown => {
            CommandFeedback::new(bot, chat_id)
                .send_with_keyboard(
                    FeedbackType::Warning,
                    "Неизвестная команда. Выбери действие:",
                    main_menu(),
                )
                .await?;
        }
    }

    Ok(())
}

use teloxide::prelude::*;

use crate::bot::commands::{send_menu, UPSTREAM_FAILURE};
use crate::bot::handlers::BotContext;
use crate::bot::keyboards::PICKABLE_DAYS;
use crate::schedule::format::render_day;
use crate::schedule::{Group, WeekParity};
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::{log_menu_error, log_menu_success};

/// Sends one weekday's timetable for the given week.
///
/// Returns whether the timetable was rendered; `false` means the upstream
/// fetch failed and an error message went out instead.
pub async fn send_day(
    bot: &Bot,
    chat_id: ChatId,
    ctx: &BotContext,
    group: &Group,
    day: usize,
    parity: WeekParity,
    show_menu: bool,
) -> ResponseResult<bool> {
    let rendered = match ctx.gateway.fetch_schedule(group).await {
        Ok(schedule) => {
            let text = render_day(day, parity, schedule.lessons_on(day));
            bot.send_message(chat_id, text).await?;
            log_menu_success("day", chat_id.0, Some(&format!("day {day}, {parity} week")));
            true
        }
        Err(e) => {
            log_menu_error("day", chat_id.0, &e.to_string());
            CommandFeedback::new(bot.clone(), chat_id).error(UPSTREAM_FAILURE).await?;
            false
        }
    };

    if show_menu {
        send_menu(bot, chat_id).await?;
    }
    Ok(rendered)
}

/// Sends Monday through Saturday one by one, then the menu once.
pub async fn send_week(
    bot: &Bot,
    chat_id: ChatId,
    ctx: &BotContext,
    group: &Group,
    parity: WeekParity,
) -> ResponseResult<()> {
    for day in 0..PICKABLE_DAYS {
        send_day(bot, chat_id, ctx, group, day, parity, false).await?;
    }
    send_menu(bot, chat_id).await
}

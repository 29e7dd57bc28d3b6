use chrono::Utc;
use teloxide::prelude::*;

use crate::bot::commands::send_menu;
use crate::bot::handlers::BotContext;
use crate::schedule::format::render_nearest;
use crate::schedule::{find_nearest, Group, NearestLesson};
use crate::utils::datetime::local_date;
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::{log_menu_error, log_menu_success};

pub async fn send_nearest(
    bot: &Bot,
    chat_id: ChatId,
    ctx: &BotContext,
    group: &Group,
) -> ResponseResult<()> {
    match ctx.gateway.fetch_schedule(group).await {
        Ok(schedule) => {
            let now = Utc::now();
            let result = find_nearest(&schedule, now, ctx.offset, |date| ctx.calendar.parity_of(date));
            let outcome = match &result {
                NearestLesson::Current { .. } => "current",
                NearestLesson::UpcomingToday { .. } => "later today",
                NearestLesson::UpcomingFutureDay { .. } => "future day",
                NearestLesson::NotFound => "not found",
            };
            bot.send_message(chat_id, render_nearest(&result, local_date(now, ctx.offset)))
                .await?;
            log_menu_success("nearest", chat_id.0, Some(outcome));
        }
        Err(e) => {
            log_menu_error("nearest", chat_id.0, &e.to_string());
            CommandFeedback::new(bot.clone(), chat_id)
                .error("Ошибка при поиске ближайшей пары. Попробуйте позже.")
                .await?;
        }
    }
    send_menu(bot, chat_id).await
}

use teloxide::prelude::*;

use crate::bot::commands::send_menu;
use crate::bot::handlers::BotContext;
use crate::schedule::format::{render_exams, sort_exams};
use crate::schedule::Group;
use crate::utils::logging::log_menu_success;

pub async fn send_exams(
    bot: &Bot,
    chat_id: ChatId,
    ctx: &BotContext,
    group: &Group,
) -> ResponseResult<()> {
    // fetch errors are already logged and come back as an empty list
    let mut exams = ctx.gateway.fetch_exams(group).await;
    sort_exams(&mut exams, ctx.offset);

    bot.send_message(chat_id, render_exams(&exams, ctx.offset)).await?;
    log_menu_success("exams", chat_id.0, Some(&format!("{} exams", exams.len())));
    send_menu(bot, chat_id).await
}

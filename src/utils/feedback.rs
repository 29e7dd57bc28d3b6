use teloxide::prelude::*;
use teloxide::types::{KeyboardMarkup, MessageId};

/// Feedback types for different outcomes
#[derive(Debug, Clone, Copy)]
pub enum FeedbackType {
    Success,
    Warning,
    Error,
    Info,
    Processing,
}

impl FeedbackType {
    fn emoji(self) -> &'static str {
        match self {
            FeedbackType::Success => "✅",
            FeedbackType::Warning => "⚠️",
            FeedbackType::Error => "❌",
            FeedbackType::Info => "ℹ️",
            FeedbackType::Processing => "⏳",
        }
    }

    /// Prefixes `message` with this type's emoji.
    pub fn decorate(self, message: &str) -> String {
        format!("{} {}", self.emoji(), message)
    }
}

/// Centralized feedback for chat replies
pub struct CommandFeedback {
    bot: Bot,
    chat_id: ChatId,
}

impl CommandFeedback {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    /// Send immediate feedback message
    pub async fn send(&self, feedback_type: FeedbackType, message: &str) -> ResponseResult<Message> {
        self.bot
            .send_message(self.chat_id, feedback_type.decorate(message))
            .await
    }

    /// Send feedback together with a reply keyboard
    pub async fn send_with_keyboard(
        &self,
        feedback_type: FeedbackType,
        message: &str,
        keyboard: KeyboardMarkup,
    ) -> ResponseResult<Message> {
        self.bot
            .send_message(self.chat_id, feedback_type.decorate(message))
            .reply_markup(keyboard)
            .await
    }

    /// Send a processing message that can be updated later
    pub async fn send_processing(&self, message: &str) -> ResponseResult<Message> {
        self.send(FeedbackType::Processing, message).await
    }

    /// Update an existing message with new feedback
    pub async fn update_message(
        &self,
        message_id: MessageId,
        feedback_type: FeedbackType,
        message: &str,
    ) -> ResponseResult<Message> {
        self.bot
            .edit_message_text(self.chat_id, message_id, feedback_type.decorate(message))
            .await
    }

    pub async fn error(&self, message: &str) -> ResponseResult<Message> {
        self.send(FeedbackType::Error, message).await
    }

    /// Send validation error with helpful suggestion
    pub async fn validation_error(&self, error: &str, suggestion: &str) -> ResponseResult<Message> {
        let message = format!("{error}\n\n💡 {suggestion}");
        self.send(FeedbackType::Warning, &message).await
    }
}

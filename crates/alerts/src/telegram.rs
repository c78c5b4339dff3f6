//! Telegram delivery.

use teloxide::prelude::*;
use thiserror::Error;

/// Telegram caps message bodies at 4096 characters.
pub const MAX_MESSAGE_LEN: usize = 4096;

#[derive(Error, Debug)]
pub enum TelegramError {
    #[error("Telegram API error: {0}")]
    Api(#[from] teloxide::RequestError),
    #[error("invalid chat id: {0}")]
    InvalidChatId(String),
}

/// Send-only Telegram bot wrapper.
#[derive(Debug)]
pub struct TelegramBot {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramBot {
    /// Create a new bot for the given token and destination chat.
    ///
    /// The chat id must be a numeric Telegram id; group ids are negative.
    pub fn new(token: &str, chat_id: &str) -> Result<Self, TelegramError> {
        let chat_id = chat_id
            .parse::<i64>()
            .map(ChatId)
            .map_err(|_| TelegramError::InvalidChatId(chat_id.to_string()))?;
        Ok(Self {
            bot: Bot::new(token),
            chat_id,
        })
    }

    /// Deliver one message to the destination chat.
    pub async fn send(&self, text: &str) -> Result<(), TelegramError> {
        self.bot.send_message(self.chat_id, text).await?;
        Ok(())
    }
}

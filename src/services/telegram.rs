// src/services/telegram.rs

//! Telegram notification channel.
//!
//! Sends plain-text messages to the configured chat via the Bot API.
//! Both homework-status and loop-failure notifications go through the
//! same [`Notify`] contract.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;

use crate::error::{AppError, Result};

/// Outbound notification channel.
#[async_trait]
pub trait Notify: Send + Sync {
    /// Send a plain-text message to the destination chat.
    async fn send(&self, text: &str) -> Result<()>;
}

/// Telegram notifier bound to a single destination chat.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    /// Create a notifier from a bot token and a chat identifier.
    pub fn new(bot_token: &str, chat_id: &str) -> Result<Self> {
        let id: i64 = chat_id
            .parse()
            .map_err(|e| AppError::config(format!("invalid chat id '{chat_id}': {e}")))?;

        Ok(Self {
            bot: Bot::new(bot_token),
            chat_id: ChatId(id),
        })
    }
}

#[async_trait]
impl Notify for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        self.bot
            .send_message(self.chat_id, text)
            .send()
            .await
            .map_err(AppError::NotificationDelivery)?;

        log::info!("sent notification: {text}");
        Ok(())
    }
}

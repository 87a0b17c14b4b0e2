//! Outbound reply delivery
//!
//! Replies are fire-and-forget: a failed send is logged by the layer that
//! issued it and never retried.

use async_trait::async_trait;
use teloxide::prelude::*;

use crate::core::error::AppResult;

/// Destination for handler replies.
///
/// Implemented by the real Telegram client and by recording sinks in
/// tests, so a dispatcher can be constructed without network access.
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Send a plain-text message to a chat.
    async fn send_text(&self, chat: ChatId, text: &str) -> AppResult<()>;
}

/// Reply sink backed by the Telegram Bot API.
pub struct TelegramSink {
    bot: Bot,
}

impl TelegramSink {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ReplySink for TelegramSink {
    async fn send_text(&self, chat: ChatId, text: &str) -> AppResult<()> {
        self.bot.send_message(chat, text).await?;
        Ok(())
    }
}

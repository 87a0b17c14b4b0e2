//! Common test utilities
//!
//! This module is shared across all integration tests

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use teloxide::types::ChatId;
use tokio::sync::Mutex;

use hookbot::core::AppError;
use hookbot::core::AppResult;
use hookbot::telegram::{CommandHandler, ReplySink};
use hookbot::IncomingMessage;

/// Reply sink that records every message instead of sending it.
#[derive(Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<(ChatId, String)>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Everything "sent" so far, in order.
    pub async fn messages(&self) -> Vec<(ChatId, String)> {
        self.messages.lock().await.clone()
    }
}

#[async_trait]
impl ReplySink for RecordingSink {
    async fn send_text(&self, chat: ChatId, text: &str) -> AppResult<()> {
        self.messages.lock().await.push((chat, text.to_string()));
        Ok(())
    }
}

/// Handler that always fails.
pub struct FailingHandler;

#[async_trait]
impl CommandHandler for FailingHandler {
    async fn handle(&self, _update: IncomingMessage, _sink: Arc<dyn ReplySink>) -> AppResult<()> {
        Err(AppError::Config("handler blew up".to_string()))
    }
}

/// Handler that panics.
pub struct PanickingHandler;

#[async_trait]
impl CommandHandler for PanickingHandler {
    async fn handle(&self, _update: IncomingMessage, _sink: Arc<dyn ReplySink>) -> AppResult<()> {
        panic!("handler panicked");
    }
}

/// Builds a private-chat update payload shaped the way Telegram sends it.
pub fn create_update_json(chat_id: i64, user_id: u64, first_name: &str, text: &str) -> String {
    format!(
        r#"{{"update_id":10000,"message":{{"message_id":1,"date":1700000000,"chat":{{"id":{chat_id},"type":"private","first_name":"{first_name}"}},"from":{{"id":{user_id},"is_bot":false,"first_name":"{first_name}"}},"text":"{text}"}}}}"#
    )
}

/// Builds an update payload whose message has no sender.
pub fn create_update_json_without_sender(chat_id: i64, text: &str) -> String {
    format!(
        r#"{{"update_id":10001,"message":{{"message_id":2,"date":1700000000,"chat":{{"id":{chat_id},"type":"private"}},"text":"{text}"}}}}"#
    )
}

/// Builds an edited-message update, which the dispatcher ignores.
pub fn create_edited_message_json(chat_id: i64, text: &str) -> String {
    format!(
        r#"{{"update_id":10002,"edited_message":{{"message_id":3,"date":1700000000,"edit_date":1700000100,"chat":{{"id":{chat_id},"type":"private","first_name":"Ann"}},"from":{{"id":7,"is_bot":false,"first_name":"Ann"}},"text":"{text}"}}}}"#
    )
}

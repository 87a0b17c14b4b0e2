//! Inbound update parsing and command token extraction

use teloxide::types::{ChatId, Update, UpdateKind, UserId};

use crate::core::error::{AppError, AppResult};

/// Message sender, when Telegram identifies one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub id: UserId,
    pub first_name: String,
}

/// One inbound text message, reduced to the fields the bot acts on.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub chat: ChatId,
    pub from: Option<Sender>,
    pub text: String,
}

impl IncomingMessage {
    /// Reduces a Telegram update to an `IncomingMessage`.
    ///
    /// Returns `None` for updates that carry no text message (edited
    /// messages, callback queries, channel posts and so on) — those are
    /// ignored, not errors.
    pub fn from_update(update: Update) -> Option<Self> {
        let UpdateKind::Message(message) = update.kind else {
            return None;
        };
        let text = message.text()?.to_string();
        Some(Self {
            chat: message.chat.id,
            from: message.from.map(|user| Sender {
                id: user.id,
                first_name: user.first_name,
            }),
            text,
        })
    }

    /// The command token of this message, if it is a command.
    pub fn command(&self) -> Option<&str> {
        extract_command(&self.text)
    }
}

/// Parses a raw webhook body into a Telegram update.
pub fn parse(raw: &[u8]) -> AppResult<Update> {
    serde_json::from_slice(raw).map_err(AppError::MalformedPayload)
}

/// Extracts the command token from message text.
///
/// The token is present only when the text starts with `/`; it runs up to
/// the first whitespace, with any `@botname` suffix stripped. Matching is
/// case-sensitive, so `/Start` and `/start` are different tokens.
pub fn extract_command(text: &str) -> Option<&str> {
    let rest = text.strip_prefix('/')?;
    // split, not split_whitespace: the token ends at the FIRST whitespace,
    // so "/ start" carries no token at all.
    let token = rest.split(char::is_whitespace).next().unwrap_or("");
    let token = token.split('@').next().unwrap_or(token);
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

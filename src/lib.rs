//! Hookbot - minimal Telegram webhook bot
//!
//! Receives Telegram updates over HTTP, routes slash commands to a set of
//! registered handlers and replies with canned text through the Bot API.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging and the HTTP front door
//! - `telegram`: update parsing, command routing and the Bot API client

pub mod core;
pub mod telegram;

// Re-export commonly used types for convenience
pub use crate::core::{config, AppError, AppResult};
pub use crate::telegram::{Dispatcher, IncomingMessage};

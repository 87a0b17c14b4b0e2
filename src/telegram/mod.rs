//! Telegram integration: update parsing, command routing and the Bot API client

pub mod admin;
pub mod bot;
pub mod commands;
pub mod dispatch;
pub mod outbound;
pub mod registry;
pub mod update;
pub mod webhook;

// Re-exports for convenience
pub use bot::create_bot;
pub use commands::default_registry;
pub use dispatch::Dispatcher;
pub use outbound::{ReplySink, TelegramSink};
pub use registry::{CommandHandler, CommandRegistry};
pub use update::{extract_command, IncomingMessage, Sender};
pub use webhook::{ensure_webhook, WebhookApi};

//! Built-in command handlers
//!
//! Each command replies with canned text through the reply sink. Send
//! failures propagate to the dispatcher, which logs them; replies are
//! never retried.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::AppResult;
use crate::telegram::admin::AdminPanel;
use crate::telegram::outbound::ReplySink;
use crate::telegram::registry::{CommandHandler, CommandRegistry};
use crate::telegram::update::IncomingMessage;

/// /start — greets the sender by name and points at /help.
pub struct Start;

#[async_trait]
impl CommandHandler for Start {
    async fn handle(&self, update: IncomingMessage, sink: Arc<dyn ReplySink>) -> AppResult<()> {
        let name = update
            .from
            .as_ref()
            .map(|sender| sender.first_name.as_str())
            .unwrap_or("there");
        let text = format!("Hello, {}!\nSend /help to see the available commands.", name);
        sink.send_text(update.chat, &text).await
    }
}

/// /help — lists the available commands.
pub struct Help;

#[async_trait]
impl CommandHandler for Help {
    async fn handle(&self, update: IncomingMessage, sink: Arc<dyn ReplySink>) -> AppResult<()> {
        let text = "Bot commands:\n\
                    /start - start here\n\
                    /help - this help\n\
                    /verify - run a verification check\n\
                    /status - show service status\n\
                    /admin_panel - admin panel (allow-listed users only)";
        sink.send_text(update.chat, text).await
    }
}

/// /verify — canned verification confirmation.
pub struct Verify;

#[async_trait]
impl CommandHandler for Verify {
    async fn handle(&self, update: IncomingMessage, sink: Arc<dyn ReplySink>) -> AppResult<()> {
        sink.send_text(update.chat, "Verification passed ✅").await
    }
}

/// /status — canned liveness text.
pub struct Status;

#[async_trait]
impl CommandHandler for Status {
    async fn handle(&self, update: IncomingMessage, sink: Arc<dyn ReplySink>) -> AppResult<()> {
        sink.send_text(update.chat, "Status: the service is up and running.").await
    }
}

/// Builds the registry with every built-in command.
///
/// # Arguments
/// * `admins` - User ids allowed into the admin panel
///
/// # Errors
/// Returns an error if a command token is registered twice.
pub fn default_registry(admins: HashSet<i64>) -> AppResult<CommandRegistry> {
    let mut registry = CommandRegistry::new();
    registry.register("start", Arc::new(Start))?;
    registry.register("help", Arc::new(Help))?;
    registry.register("verify", Arc::new(Verify))?;
    registry.register("status", Arc::new(Status))?;
    registry.register("admin_panel", Arc::new(AdminPanel::new(admins)))?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_contains_all_commands() {
        let registry = default_registry(HashSet::new()).unwrap();

        assert_eq!(registry.len(), 5);
        for token in ["start", "help", "verify", "status", "admin_panel"] {
            assert!(registry.lookup(token).is_some(), "missing handler for /{}", token);
        }
    }
}

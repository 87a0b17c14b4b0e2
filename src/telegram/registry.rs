//! Command registry: token → handler mapping

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::{AppError, AppResult};
use crate::telegram::outbound::ReplySink;
use crate::telegram::update::IncomingMessage;

/// A single command handler.
///
/// Handlers reply through the sink; a returned error is logged by the
/// dispatcher and never reaches the calling platform.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, update: IncomingMessage, sink: Arc<dyn ReplySink>) -> AppResult<()>;
}

/// Mapping from command token to handler.
///
/// Built once at startup and read-only afterwards, so concurrent lookups
/// need no locking. Tokens are case-sensitive, matched exactly and stored
/// without the leading slash.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a handler for a command token.
    ///
    /// Fails fast on a duplicate token: the registry is assembled from a
    /// hand-maintained list at startup, and a duplicate there silently
    /// shadowing a handler would be much harder to notice than a refused
    /// start.
    pub fn register(&mut self, token: impl Into<String>, handler: Arc<dyn CommandHandler>) -> AppResult<()> {
        let token = token.into();
        if self.handlers.contains_key(&token) {
            return Err(AppError::DuplicateCommand(token));
        }
        self.handlers.insert(token, handler);
        Ok(())
    }

    /// Looks up the handler for a token. A missing token is not an error.
    pub fn lookup(&self, token: &str) -> Option<&Arc<dyn CommandHandler>> {
        self.handlers.get(token)
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

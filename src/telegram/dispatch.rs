//! Update dispatcher: routes inbound updates to registered handlers
//!
//! Everything a handler can do wrong stops here: errors and panics are
//! logged with the command token and the dispatch call completes normally
//! either way, so the HTTP boundary can keep its always-200 contract.

use std::sync::Arc;

use crate::core::error::AppResult;
use crate::telegram::outbound::ReplySink;
use crate::telegram::registry::CommandRegistry;
use crate::telegram::update::{self, IncomingMessage};

/// Routes inbound updates to command handlers.
///
/// Owns its command registry and a handle to the outbound messaging
/// client; construct one per process (or per test), there is no global
/// instance.
pub struct Dispatcher {
    registry: CommandRegistry,
    sink: Arc<dyn ReplySink>,
}

impl Dispatcher {
    pub fn new(registry: CommandRegistry, sink: Arc<dyn ReplySink>) -> Self {
        Self { registry, sink }
    }

    /// Parses a raw webhook body and dispatches the update it contains.
    ///
    /// Only the parse step can fail; everything past it is contained by
    /// `dispatch`. Updates that carry no text message dispatch as a no-op.
    pub async fn dispatch_raw(&self, raw: &[u8]) -> AppResult<()> {
        let update = update::parse(raw)?;
        match IncomingMessage::from_update(update) {
            Some(message) => self.dispatch(message).await,
            None => log::debug!("Update carries no text message, ignoring"),
        }
        Ok(())
    }

    /// Routes one message to its command handler.
    ///
    /// Messages without a command token, and tokens without a registered
    /// handler, are silent no-ops.
    pub async fn dispatch(&self, message: IncomingMessage) {
        let Some(token) = message.command().map(str::to_string) else {
            log::debug!("Message in chat {} carries no command", message.chat);
            return;
        };

        let Some(handler) = self.registry.lookup(&token) else {
            log::debug!("No handler registered for /{}", token);
            return;
        };

        log::info!("Dispatching /{} for chat {}", token, message.chat);

        // Run the handler in its own task so a panic surfaces on the
        // JoinHandle instead of unwinding through the request.
        let handler = Arc::clone(handler);
        let sink = Arc::clone(&self.sink);
        let outcome = tokio::spawn(async move { handler.handle(message, sink).await }).await;

        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(e)) => log::error!("Handler for /{} failed: {}", token, e),
            Err(join_err) if join_err.is_panic() => {
                log::error!("Handler for /{} panicked: {}", token, join_err);
            }
            Err(join_err) => log::warn!("Handler task for /{} was cancelled: {}", token, join_err),
        }
    }
}

//! Admin allow-list gating and the admin panel command

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::AppResult;
use crate::telegram::outbound::ReplySink;
use crate::telegram::registry::CommandHandler;
use crate::telegram::update::IncomingMessage;

/// /admin_panel — gated by the static admin allow-list.
pub struct AdminPanel {
    admins: HashSet<i64>,
}

impl AdminPanel {
    pub fn new(admins: HashSet<i64>) -> Self {
        Self { admins }
    }

    /// Check if user is admin
    pub fn is_admin(&self, user_id: i64) -> bool {
        self.admins.contains(&user_id)
    }
}

#[async_trait]
impl CommandHandler for AdminPanel {
    async fn handle(&self, update: IncomingMessage, sink: Arc<dyn ReplySink>) -> AppResult<()> {
        // An update without an identifiable sender is not allow-listed.
        let allowed = update
            .from
            .as_ref()
            .and_then(|sender| i64::try_from(sender.id.0).ok())
            .map(|id| self.is_admin(id))
            .unwrap_or(false);

        let text = if allowed {
            "Welcome to the admin panel."
        } else {
            "You do not have access to the admin panel."
        };
        sink.send_text(update.chat, text).await
    }
}

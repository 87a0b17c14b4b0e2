use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Configuration constants for the bot

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
/// Required: startup aborts when both are unset (checked in main)
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Path of the webhook receiver endpoint
/// Read from WEBHOOK_PATH environment variable
/// Default: /telegram-webhook
pub static WEBHOOK_PATH: Lazy<String> = Lazy::new(|| {
    let path = env::var("WEBHOOK_PATH").unwrap_or_else(|_| "/telegram-webhook".to_string());
    normalize_webhook_path(&path)
});

/// Public base URL of this deployment
/// Read from PUBLIC_URL environment variable
/// Example: https://my-bot.onrender.com
/// When set, the webhook is registered with Telegram automatically on startup
pub static PUBLIC_URL: Lazy<Option<String>> = Lazy::new(|| env::var("PUBLIC_URL").ok());

/// HTTP listen port
/// Read from PORT environment variable
/// Default: 5000
pub static PORT: Lazy<u16> = Lazy::new(|| env::var("PORT").ok().and_then(|s| s.parse().ok()).unwrap_or(5000));

/// Debug flag raising the log level to debug
/// Read from DEBUG environment variable ("1", "true" or "yes")
pub static DEBUG: Lazy<bool> = Lazy::new(|| {
    env::var("DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
});

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: app.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "app.log".to_string()));

/// Webhook paths are matched verbatim by the router, so a missing leading
/// slash would make the endpoint unreachable.
fn normalize_webhook_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for outbound Bot API calls (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Admin configuration
pub mod admin {
    use once_cell::sync::Lazy;
    use std::env;

    /// Splits a raw allow-list into user ids, skipping entries that do not
    /// parse as integers.
    pub fn parse_admin_ids(raw: &str) -> Vec<i64> {
        raw.split([',', ' ', '\n', '\t'])
            .filter_map(|part| part.trim().parse::<i64>().ok())
            .collect()
    }

    /// Admin user IDs (comma-separated)
    /// Read from ADMINS environment variable
    pub static ADMIN_IDS: Lazy<Vec<i64>> =
        Lazy::new(|| env::var("ADMINS").ok().map(|raw| parse_admin_ids(&raw)).unwrap_or_default());
}

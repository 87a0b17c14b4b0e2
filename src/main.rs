use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;

use hookbot::core::{config, init_logger, start_web_server, AppError};
use hookbot::telegram::{create_bot, default_registry, ensure_webhook, Dispatcher, TelegramSink};

/// Main entry point for the webhook bot
///
/// Loads configuration, registers the webhook if a public URL is
/// configured and serves the receiver endpoint until shutdown.
///
/// # Errors
/// Returns an error if initialization fails (logging, missing bot token,
/// web server bind).
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present
    let _ = dotenv();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    // Log panics from handler tasks instead of losing them to stderr
    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
    }));

    if config::BOT_TOKEN.is_empty() {
        return Err(AppError::Config(
            "BOT_TOKEN environment variable not set. Set it before starting the bot.".to_string(),
        )
        .into());
    }

    // Create bot instance
    let bot = create_bot()?;

    let admins: HashSet<i64> = config::admin::ADMIN_IDS.iter().copied().collect();
    if admins.is_empty() {
        log::info!("No admin ids configured (ADMINS unset or empty)");
    } else {
        log::info!("{} admin id(s) configured", admins.len());
    }

    let registry = default_registry(admins)?;
    let sink = Arc::new(TelegramSink::new(bot.clone()));
    let dispatcher = Arc::new(Dispatcher::new(registry, sink));

    // Register the webhook if a public base URL is configured. A rejected
    // registration is not fatal: the receiver endpoint still comes up and
    // registration is retried on the next restart.
    match config::PUBLIC_URL.as_deref() {
        Some(base_url) => match ensure_webhook(&bot, base_url, &config::WEBHOOK_PATH).await {
            Ok(true) => log::info!("Webhook registered"),
            Ok(false) => {}
            Err(e) => log::warn!(
                "Failed to set webhook automatically: {}. You can set it manually with the Telegram API.",
                e
            ),
        },
        None => log::info!("PUBLIC_URL not set - skipping automatic webhook registration"),
    }

    log::info!(
        "Starting bot server on 0.0.0.0:{}, webhook path: {}",
        *config::PORT,
        *config::WEBHOOK_PATH
    );

    start_web_server(*config::PORT, &config::WEBHOOK_PATH, dispatcher)
        .await
        .map_err(|e| anyhow::anyhow!("Web server error: {}", e))?;

    Ok(())
}

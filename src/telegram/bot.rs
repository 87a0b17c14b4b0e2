//! Bot instance creation

use reqwest::ClientBuilder;
use teloxide::Bot;

use crate::core::config;

/// Creates a Bot instance with custom or default API URL
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - Failed to create bot (invalid URL, client build failure)
pub fn create_bot() -> anyhow::Result<Bot> {
    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;

    // Check if a local Bot API server is configured
    let bot = if let Ok(bot_api_url) = std::env::var("BOT_API_URL") {
        log::info!("Using custom Bot API URL: {}", bot_api_url);
        let api_url = url::Url::parse(&bot_api_url).map_err(|e| anyhow::anyhow!("Invalid BOT_API_URL: {}", e))?;
        Bot::with_client(config::BOT_TOKEN.as_str(), client).set_api_url(api_url)
    } else {
        Bot::with_client(config::BOT_TOKEN.as_str(), client)
    };

    Ok(bot)
}

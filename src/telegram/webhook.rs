//! Webhook registration with the Telegram platform
//!
//! Registration runs once at startup and is idempotent: the currently
//! registered URL is queried first and the registration call is skipped
//! when it already matches.

use async_trait::async_trait;
use teloxide::prelude::*;
use url::Url;

use crate::core::error::AppResult;

/// The platform's webhook registration surface.
///
/// A seam over the two Bot API calls the registrar needs, so startup
/// logic can be exercised against a recording fake.
#[async_trait]
pub trait WebhookApi: Send + Sync {
    /// URL currently registered with the platform, if any.
    async fn registered_url(&self) -> AppResult<Option<String>>;

    /// Register `url` as the webhook callback.
    async fn register_url(&self, url: &str) -> AppResult<()>;
}

#[async_trait]
impl WebhookApi for Bot {
    async fn registered_url(&self) -> AppResult<Option<String>> {
        let info = self.get_webhook_info().await?;
        Ok(info.url.map(|u| u.to_string()))
    }

    async fn register_url(&self, url: &str) -> AppResult<()> {
        let parsed = Url::parse(url)?;
        self.set_webhook(parsed).await?;
        Ok(())
    }
}

/// Callback URL expected for this deployment: the public base URL with
/// any trailing slash stripped, followed by the webhook path.
pub fn expected_webhook_url(public_base_url: &str, webhook_path: &str) -> String {
    format!("{}{}", public_base_url.trim_end_matches('/'), webhook_path)
}

/// Registers the webhook with the platform unless it is already set.
///
/// Returns `true` when a registration call was issued and `false` when
/// the registered URL already matched. A platform-rejected registration
/// comes back as an error; the caller decides whether that is fatal
/// (startup treats it as a warning and continues).
pub async fn ensure_webhook<A: WebhookApi + ?Sized>(
    api: &A,
    public_base_url: &str,
    webhook_path: &str,
) -> AppResult<bool> {
    let expected = expected_webhook_url(public_base_url, webhook_path);

    let current = api.registered_url().await?;
    if current.as_deref() == Some(expected.as_str()) {
        log::info!("Webhook already set to {}", expected);
        return Ok(false);
    }

    log::info!("Setting webhook to {}", expected);
    api.register_url(&expected).await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Mutex;

    use crate::core::error::AppError;

    /// Fake registration API that remembers the registered URL, like the
    /// real platform does.
    #[derive(Default)]
    struct FakeApi {
        current: Mutex<Option<String>>,
        register_calls: AtomicUsize,
        reject_registration: bool,
    }

    #[async_trait]
    impl WebhookApi for FakeApi {
        async fn registered_url(&self) -> AppResult<Option<String>> {
            Ok(self.current.lock().await.clone())
        }

        async fn register_url(&self, url: &str) -> AppResult<()> {
            self.register_calls.fetch_add(1, Ordering::SeqCst);
            if self.reject_registration {
                return Err(AppError::Config("registration rejected".to_string()));
            }
            *self.current.lock().await = Some(url.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_expected_webhook_url_strips_trailing_slash() {
        assert_eq!(
            expected_webhook_url("https://bot.example.com/", "/telegram-webhook"),
            "https://bot.example.com/telegram-webhook"
        );
        assert_eq!(
            expected_webhook_url("https://bot.example.com", "/telegram-webhook"),
            "https://bot.example.com/telegram-webhook"
        );
    }

    #[tokio::test]
    async fn test_ensure_webhook_registers_when_unset() {
        let api = FakeApi::default();

        let registered = ensure_webhook(&api, "https://bot.example.com", "/telegram-webhook")
            .await
            .unwrap();

        assert!(registered);
        assert_eq!(api.register_calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            api.registered_url().await.unwrap().as_deref(),
            Some("https://bot.example.com/telegram-webhook")
        );
    }

    #[tokio::test]
    async fn test_ensure_webhook_is_idempotent() {
        let api = FakeApi::default();

        let first = ensure_webhook(&api, "https://bot.example.com", "/telegram-webhook")
            .await
            .unwrap();
        let second = ensure_webhook(&api, "https://bot.example.com", "/telegram-webhook")
            .await
            .unwrap();

        assert!(first);
        assert!(!second);
        assert_eq!(api.register_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_ensure_webhook_ignores_trailing_slash_differences() {
        let api = FakeApi::default();

        ensure_webhook(&api, "https://bot.example.com", "/telegram-webhook")
            .await
            .unwrap();
        let second = ensure_webhook(&api, "https://bot.example.com/", "/telegram-webhook")
            .await
            .unwrap();

        assert!(!second);
        assert_eq!(api.register_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_ensure_webhook_replaces_stale_url() {
        let api = FakeApi::default();
        *api.current.lock().await = Some("https://old.example.com/telegram-webhook".to_string());

        let registered = ensure_webhook(&api, "https://bot.example.com", "/telegram-webhook")
            .await
            .unwrap();

        assert!(registered);
        assert_eq!(api.register_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_ensure_webhook_surfaces_platform_rejection() {
        let api = FakeApi {
            reject_registration: true,
            ..FakeApi::default()
        };

        let result = ensure_webhook(&api, "https://bot.example.com", "/telegram-webhook").await;

        assert!(result.is_err());
        assert_eq!(api.register_calls.load(Ordering::SeqCst), 1);
    }
}

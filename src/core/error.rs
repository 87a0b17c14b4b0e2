use thiserror::Error;

/// Centralized error types for the application
///
/// All errors in the application are converted to this enum for consistent
/// error handling. Uses `thiserror` for automatic conversion and display
/// formatting.
#[derive(Error, Debug)]
pub enum AppError {
    /// Startup configuration problems (missing bot token, invalid URLs)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Inbound webhook body that does not parse as a Telegram update
    #[error("Malformed update payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// A command token registered twice
    #[error("Command /{0} is already registered")]
    DuplicateCommand(String),

    /// Telegram API errors
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

//! Telegram client error types.

/// Errors that can occur when talking to the Telegram Bot API.
#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    /// HTTP request failed. The URL, which embeds the bot token, is stripped.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Bot token rejected
    #[error("unauthorized: check TELEGRAM_BOT_TOKEN")]
    Unauthorized,

    /// Flood control; retry after the given number of seconds
    #[error("rate limited by Telegram, retry after {retry_after}s")]
    RateLimited { retry_after: u64 },

    /// API returned `ok: false`
    #[error("Telegram API error {code}: {description}")]
    Api { code: i32, description: String },
}

impl From<reqwest::Error> for TelegramError {
    fn from(e: reqwest::Error) -> Self {
        TelegramError::Http(e.without_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TelegramError::RateLimited { retry_after: 7 };
        assert_eq!(err.to_string(), "rate limited by Telegram, retry after 7s");

        let err = TelegramError::Api {
            code: 400,
            description: "Bad Request: message is not modified".into(),
        };
        assert_eq!(
            err.to_string(),
            "Telegram API error 400: Bad Request: message is not modified"
        );
    }
}

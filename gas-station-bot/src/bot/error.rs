//! Top-level errors that stop the bot.

use crate::config::ConfigError;
use crate::places::PlacesError;
use crate::telegram::TelegramError;

/// Errors that end the process.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("places client: {0}")]
    Places(#[from] PlacesError),

    #[error("telegram: {0}")]
    Telegram(#[from] TelegramError),

    #[error("HTTP server: {0}")]
    Server(#[from] std::io::Error),
}

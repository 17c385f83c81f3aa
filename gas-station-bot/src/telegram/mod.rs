//! Telegram Bot API client.
//!
//! Updates are received by long polling `getUpdates`; replies go out as
//! JSON POSTs, except documents, which are multipart uploads.

mod client;
mod error;
mod types;

pub use client::{TelegramClient, TelegramConfig};
pub use error::TelegramError;
pub use types::{ApiResponse, Chat, Message, ParseMode, ResponseParameters, Update, User};

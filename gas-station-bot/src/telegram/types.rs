//! Telegram Bot API DTOs.
//!
//! Only the fields the bot reads are modelled. Telegram omits absent
//! optional fields rather than sending null.

use serde::{Deserialize, Serialize};

/// Envelope wrapping every Bot API response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,

    pub result: Option<T>,

    /// Human-readable error, present when `ok` is false.
    pub description: Option<String>,

    /// Mirrors the HTTP status when `ok` is false.
    pub error_code: Option<i32>,

    pub parameters: Option<ResponseParameters>,
}

/// Extra information attached to some errors.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseParameters {
    /// Seconds to wait before repeating a flood-limited request.
    pub retry_after: Option<u64>,
}

/// An incoming update from `getUpdates`.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,

    pub message: Option<Message>,
}

/// A chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,

    pub chat: Chat,

    pub from: Option<User>,

    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,

    /// "private", "group", "supergroup" or "channel".
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,

    pub is_bot: bool,

    pub first_name: String,

    pub username: Option<String>,
}

/// Formatting mode for outgoing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParseMode {
    /// Telegram's legacy Markdown (`*bold*`, `_italic_`, `` `code` ``).
    Markdown,
}

impl ParseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseMode::Markdown => "Markdown",
        }
    }
}

/// Body of `sendMessage`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SendMessage<'a> {
    pub chat_id: i64,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
}

/// Body of `editMessageText`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct EditMessageText<'a> {
    pub chat_id: i64,
    pub message_id: i64,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
}

/// Body of `deleteMessage`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct DeleteMessage {
    pub chat_id: i64,
    pub message_id: i64,
}

/// Body of `sendChatAction`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SendChatAction<'a> {
    pub chat_id: i64,
    pub action: &'a str,
}

/// Body of `getUpdates`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct GetUpdates<'a> {
    pub offset: i64,
    pub timeout: u64,
    pub allowed_updates: &'a [&'a str],
}

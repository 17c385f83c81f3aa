//! Telegram Bot API HTTP client.
//!
//! Covers the handful of methods the bot needs: long polling for updates,
//! sending/editing/deleting text messages, chat actions, and uploading a
//! document.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};

use super::error::TelegramError;
use super::types::{
    ApiResponse, DeleteMessage, EditMessageText, GetUpdates, Message, ParseMode, SendChatAction,
    SendMessage, Update, User,
};

/// Default base URL for the Bot API.
const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

/// Default long-poll timeout in seconds.
const DEFAULT_POLL_TIMEOUT_SECS: u64 = 25;

/// Update kinds requested from `getUpdates`.
const ALLOWED_UPDATES: &[&str] = &["message"];

/// Configuration for the Telegram client.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot token from BotFather
    pub token: String,
    /// Base URL for the API (defaults to api.telegram.org)
    pub base_url: String,
    /// Request timeout in seconds, on top of the long-poll timeout
    pub timeout_secs: u64,
    /// How long `getUpdates` waits for new updates
    pub poll_timeout_secs: u64,
}

impl TelegramConfig {
    /// Create a new config with the given bot token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            poll_timeout_secs: DEFAULT_POLL_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing or a local Bot API server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the long-poll timeout.
    pub fn with_poll_timeout(mut self, secs: u64) -> Self {
        self.poll_timeout_secs = secs;
        self
    }
}

/// Telegram Bot API client.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    poll_timeout_secs: u64,
}

impl TelegramClient {
    /// Create a new Telegram client with the given configuration.
    pub fn new(config: TelegramConfig) -> Result<Self, TelegramError> {
        // The HTTP timeout must outlast a long poll that returns nothing.
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(
                config.timeout_secs + config.poll_timeout_secs,
            ))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            token: config.token,
            poll_timeout_secs: config.poll_timeout_secs,
        })
    }

    /// URL for a Bot API method.
    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Check the token and return the bot's own user.
    pub async fn get_me(&self) -> Result<User, TelegramError> {
        let response = self.http.get(self.method_url("getMe")).send().await?;
        read_response(response).await
    }

    /// Long-poll for updates with an id of at least `offset`.
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>, TelegramError> {
        self.call(
            "getUpdates",
            &GetUpdates {
                offset,
                timeout: self.poll_timeout_secs,
                allowed_updates: ALLOWED_UPDATES,
            },
        )
        .await
    }

    /// Send a text message, optionally as a reply.
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        parse_mode: Option<ParseMode>,
        reply_to: Option<i64>,
    ) -> Result<Message, TelegramError> {
        self.call(
            "sendMessage",
            &SendMessage {
                chat_id,
                text,
                parse_mode,
                reply_to_message_id: reply_to,
            },
        )
        .await
    }

    /// Replace the text of a message the bot sent earlier.
    pub async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        parse_mode: Option<ParseMode>,
    ) -> Result<(), TelegramError> {
        let _: IgnoredAny = self
            .call(
                "editMessageText",
                &EditMessageText {
                    chat_id,
                    message_id,
                    text,
                    parse_mode,
                },
            )
            .await?;
        Ok(())
    }

    /// Delete a message the bot sent earlier.
    pub async fn delete_message(&self, chat_id: i64, message_id: i64) -> Result<(), TelegramError> {
        let _: IgnoredAny = self
            .call(
                "deleteMessage",
                &DeleteMessage {
                    chat_id,
                    message_id,
                },
            )
            .await?;
        Ok(())
    }

    /// Show a chat action such as "typing" for a few seconds.
    pub async fn send_chat_action(&self, chat_id: i64, action: &str) -> Result<(), TelegramError> {
        let _: IgnoredAny = self
            .call("sendChatAction", &SendChatAction { chat_id, action })
            .await?;
        Ok(())
    }

    /// Upload a file as a document with a caption.
    pub async fn send_document(
        &self,
        chat_id: i64,
        file_name: &str,
        mime: &str,
        contents: Vec<u8>,
        caption: &str,
        parse_mode: Option<ParseMode>,
    ) -> Result<Message, TelegramError> {
        let part = Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str(mime)?;

        let mut form = Form::new()
            .text("chat_id", chat_id.to_string())
            .text("caption", caption.to_string())
            .part("document", part);

        if let Some(mode) = parse_mode {
            form = form.text("parse_mode", mode.as_str());
        }

        let response = self
            .http
            .post(self.method_url("sendDocument"))
            .multipart(form)
            .send()
            .await?;

        read_response(response).await
    }

    /// POST a JSON body to a Bot API method.
    async fn call<B: Serialize, T: DeserializeOwned>(
        &self,
        method: &str,
        body: &B,
    ) -> Result<T, TelegramError> {
        let response = self
            .http
            .post(self.method_url(method))
            .json(body)
            .send()
            .await?;

        read_response(response).await
    }
}

/// Decode a Bot API envelope.
///
/// Telegram reports errors both through the HTTP status and the `ok`
/// field, with the useful detail in the body, so the body is always read.
async fn read_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, TelegramError> {
    let status = response.status();
    let body = response.text().await?;

    let envelope: ApiResponse<T> = serde_json::from_str(&body).map_err(|e| TelegramError::Json {
        message: format!("{} (HTTP {})", e, status.as_u16()),
    })?;

    decode_envelope(envelope)
}

fn decode_envelope<T>(envelope: ApiResponse<T>) -> Result<T, TelegramError> {
    if envelope.ok {
        return envelope.result.ok_or_else(|| TelegramError::Json {
            message: "response marked ok but has no result".to_string(),
        });
    }

    let code = envelope.error_code.unwrap_or_default();
    let description = envelope.description.unwrap_or_default();

    match code {
        401 | 404 => Err(TelegramError::Unauthorized),
        429 => Err(TelegramError::RateLimited {
            retry_after: envelope
                .parameters
                .and_then(|p| p.retry_after)
                .unwrap_or(1),
        }),
        _ => Err(TelegramError::Api { code, description }),
    }
}

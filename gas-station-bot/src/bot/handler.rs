//! Turning an incoming update into replies.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::CachedStationFinder;
use crate::domain::{SearchOutcome, ZipExtraction, extract_zip_codes};
use crate::places::StationLookup;
use crate::report::{
    MAX_MESSAGE_LEN, chunk_message, csv_file_name, document_caption, generating_text,
    horizontal_csv, no_stations_text, no_zip_codes_text, preview_text, processing_text,
    searching_text, send_failed_text,
};
use crate::telegram::{Message, ParseMode, TelegramClient, TelegramError, Update};

use super::commands::Command;
use super::search::search_zip;
use super::stats::BotStats;

const MARKDOWN: Option<ParseMode> = Some(ParseMode::Markdown);

/// The bot: a Telegram client plus the cached station finder.
pub struct Bot<L> {
    telegram: TelegramClient,
    finder: Arc<CachedStationFinder<L>>,
    stats: Arc<BotStats>,
}

impl<L: StationLookup> Bot<L> {
    pub fn new(
        telegram: TelegramClient,
        finder: Arc<CachedStationFinder<L>>,
        stats: Arc<BotStats>,
    ) -> Self {
        Self {
            telegram,
            finder,
            stats,
        }
    }

    pub fn telegram(&self) -> &TelegramClient {
        &self.telegram
    }

    /// Handle one update. Only text messages are answered.
    pub async fn handle_update(&self, update: Update) -> Result<(), TelegramError> {
        let Some(message) = update.message else {
            debug!(update_id = update.update_id, "ignoring non-message update");
            return Ok(());
        };
        let Some(text) = message.text.as_deref() else {
            debug!(message_id = message.message_id, "ignoring message without text");
            return Ok(());
        };

        self.stats.record_message();

        match Command::parse(text) {
            Some(command) => {
                info!(chat_id = message.chat.id, ?command, "command received");
                self.reply(&message, command.reply()).await
            }
            None => self.handle_zip_message(&message, text).await,
        }
    }

    async fn reply(&self, message: &Message, text: &str) -> Result<(), TelegramError> {
        self.telegram
            .send_message(message.chat.id, text, MARKDOWN, Some(message.message_id))
            .await?;
        Ok(())
    }

    /// Search the ZIP codes in a free-text message and send the results.
    async fn handle_zip_message(&self, message: &Message, text: &str) -> Result<(), TelegramError> {
        let chat_id = message.chat.id;
        let extraction = extract_zip_codes(text);

        if extraction.is_empty() {
            info!(chat_id, rejected = ?extraction.rejected, "no valid ZIP codes in message");
            return self.reply(message, &no_zip_codes_text(&extraction)).await;
        }

        info!(
            chat_id,
            zips = ?extraction.zips,
            dropped = extraction.dropped,
            "searching ZIP codes"
        );

        if let Err(e) = self.telegram.send_chat_action(chat_id, "typing").await {
            debug!(error = %e, "chat action failed");
        }

        let status = self
            .telegram
            .send_message(
                chat_id,
                &searching_text(&extraction.zips),
                MARKDOWN,
                Some(message.message_id),
            )
            .await?;

        let outcome = self.search(chat_id, status.message_id, &extraction).await;
        let total = outcome.total_stations();

        if total == 0 {
            self.set_status(chat_id, status.message_id, &no_stations_text(&outcome))
                .await;
            return Ok(());
        }

        self.set_status(chat_id, status.message_id, &generating_text(total))
            .await;

        let csv = horizontal_csv(&outcome);
        let file_name = csv_file_name(&extraction.zips);

        let sent = self
            .telegram
            .send_document(
                chat_id,
                &file_name,
                "text/csv",
                csv.into_bytes(),
                &document_caption(&outcome),
                MARKDOWN,
            )
            .await;

        if let Err(e) = sent {
            warn!(chat_id, error = %e, "sending CSV failed");
            self.set_status(chat_id, status.message_id, &send_failed_text())
                .await;
            return Ok(());
        }

        info!(chat_id, %file_name, stations = total, "CSV sent");

        if let Err(e) = self.telegram.delete_message(chat_id, status.message_id).await {
            debug!(error = %e, "could not delete status message");
        }

        for chunk in chunk_message(&preview_text(&outcome, extraction.dropped), MAX_MESSAGE_LEN) {
            self.telegram
                .send_message(chat_id, &chunk, MARKDOWN, None)
                .await?;
        }

        Ok(())
    }

    /// Look up each ZIP in order, updating the status message before each.
    async fn search(
        &self,
        chat_id: i64,
        status_id: i64,
        extraction: &ZipExtraction,
    ) -> SearchOutcome {
        let total = extraction.zips.len();
        let mut results = Vec::with_capacity(total);

        for (i, &zip) in extraction.zips.iter().enumerate() {
            self.set_status(chat_id, status_id, &processing_text(i + 1, total, zip))
                .await;
            results.push(search_zip(&*self.finder, &self.stats, zip).await);
        }

        SearchOutcome { results }
    }

    /// Edit the status message. Failures (e.g. "message is not modified")
    /// do not affect the search.
    async fn set_status(&self, chat_id: i64, message_id: i64, text: &str) {
        if let Err(e) = self
            .telegram
            .edit_message_text(chat_id, message_id, text, MARKDOWN)
            .await
        {
            debug!(error = %e, "status update failed");
        }
    }
}

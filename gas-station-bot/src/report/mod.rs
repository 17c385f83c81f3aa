//! Formatting of search results for the chat.
//!
//! A finished search produces a CSV attachment with its caption, and a
//! Markdown preview that may need splitting into several messages.

mod csv;
mod markdown;
mod text;

pub use csv::{csv_file_name, horizontal_csv};
pub use markdown::{MAX_MESSAGE_LEN, chunk_message, escape_markdown, message_len};
pub use text::{
    document_caption, generating_text, no_stations_text, no_zip_codes_text, preview_text,
    processing_text, searching_text, send_failed_text,
};

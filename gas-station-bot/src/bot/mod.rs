//! Telegram bot front end.
//!
//! Each text message is either a command with a fixed reply or a list of
//! ZIP codes to search. Messages are handled one at a time, straight from
//! the polling loop.

mod commands;
mod error;
mod handler;
mod polling;
mod search;
mod stats;

pub use commands::Command;
pub use error::BotError;
pub use handler::Bot;
pub use polling::run_polling;
pub use search::{search_zip, search_zip_codes};
pub use stats::{BotStats, StatsSnapshot};

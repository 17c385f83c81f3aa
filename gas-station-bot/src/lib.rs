//! Gas station finder bot.
//!
//! A Telegram bot that answers: "Which gas stations are near these US
//! ZIP codes?" Results come back as a horizontal CSV and a chat preview.

pub mod bot;
pub mod cache;
pub mod config;
pub mod domain;
pub mod places;
pub mod report;
pub mod telegram;
pub mod web;

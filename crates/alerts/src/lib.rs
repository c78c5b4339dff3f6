//! Telegram notification layer for deal reports.
//!
//! This crate provides:
//! - Report formatting and 4096-character chunking
//! - Telegram bot integration for delivery

pub mod message;
pub mod telegram;

pub use message::{format_deals_report, split_message, NO_OFFERS_MESSAGE};
pub use telegram::{TelegramBot, TelegramError, MAX_MESSAGE_LEN};

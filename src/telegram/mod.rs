//! Telegram Bot API client and error normalization

mod client;
mod error;

pub use client::TelegramClient;
pub use error::CallError;

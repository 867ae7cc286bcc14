//! telegram-proxy: HTTP backend for the Telegram Bot API
//!
//! Translates a small REST surface into outbound Bot API calls:
//! - Token validation (getMe)
//! - Bot command listing (getMyCommands)
//! - Message sending (sendMessage)
//! - Generic method passthrough for anything else

pub mod api;
pub mod config;
pub mod diag;
pub mod proxy;
pub mod telegram;

pub use config::AppConfig;
pub use proxy::run_server;
pub use telegram::{CallError, TelegramClient};

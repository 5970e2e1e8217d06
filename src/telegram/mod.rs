//! Telegram Bot API integration for the bot.
//!
//! This module provides a small Telegram client built on `reqwest` with support for:
//! - Long polling of updates (`getUpdates`)
//! - Sending Markdown messages with inline keyboards (`sendMessage`)
//! - Answering inline button presses (`answerCallbackQuery`)
//!
//! # Architecture
//!
//! The module is structured around the [`client::TelegramClient`] which coordinates:
//! - **Requester**: raw Bot API calls via the [`Requester`] trait
//! - **Sync**: the long polling loop and update offset via the sync submodule
//!
//! # Examples
//!
//! ```ignore
//! # async fn example() -> anyhow::Result<()> {
//! let requester = TelegramRequester::new("https://api.telegram.org", "123:ABC", 30)?;
//! let client = TelegramClient::new(requester, 30).await?;
//! client.send_text(-100123, "Hello group", None).await;
//! # Ok(())
//! # }
//! ```

use std::fmt;

mod client;
mod request_structs;
mod requester;
mod response_structs;
mod sync;

pub use crate::telegram::client::TelegramClient;
pub use crate::telegram::request_structs::{
    AnswerCallbackQuery, InlineKeyboardButton, InlineKeyboardMarkup, SendMessage,
};
#[cfg(test)]
pub use crate::telegram::requester::MockRequester;
pub use crate::telegram::requester::{Requester, TelegramRequester};
pub use crate::telegram::response_structs::{CallbackQuery, Chat, Message, Update, User};

/// Errors that can occur while talking to the Telegram Bot API.
#[derive(Debug)]
pub enum TransportError {
    /// The HTTP request failed or the response could not be decoded
    Http(reqwest::Error),
    /// The Bot API answered with `ok: false`
    Api(String),
    /// The bot token was rejected (HTTP 401)
    Unauthorized,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Http(e) => write!(f, "http error: {}", e),
            TransportError::Api(description) => write!(f, "bot api error: {}", description),
            TransportError::Unauthorized => write!(f, "bot token rejected by the telegram api"),
        }
    }
}

impl std::error::Error for TransportError {}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        TransportError::Http(error)
    }
}

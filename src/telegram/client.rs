//! Telegram client wrapper for bot messaging and polling.
//!
//! This module provides a high-level [`TelegramClient`] interface that wraps a
//! [`Requester`] and handles message sending, callback answers and the update loop.
//! Delivery failures are logged and swallowed: one failed message never stops the bot.

use anyhow::anyhow;
use log::{error, info};
use std::future::Future;

use crate::telegram::{
    AnswerCallbackQuery, InlineKeyboardMarkup, Requester, SendMessage, TransportError, Update,
    request_structs::ReplyParameters, sync::TelegramSync,
};

/// High-level Telegram client for bot messaging operations.
///
/// Generic over the [`Requester`] so the bot can be exercised against a mock.
pub struct TelegramClient<R: Requester> {
    /// Bot API requester
    requester: R,
    /// Username of the bot account, without `@`
    username: String,
    /// Long polling timeout in seconds
    polling_timeout: u64,
}

impl<R: Requester> TelegramClient<R> {
    /// Creates a new Telegram client and checks the bot token.
    ///
    /// Calls `getMe` once to validate the token and learn the bot username, which
    /// is needed to recognize commands such as `/list@rollcall_bot`.
    ///
    /// # Arguments
    ///
    /// * `requester` - Bot API requester
    /// * `polling_timeout` - Long polling timeout in seconds
    ///
    /// # Errors
    ///
    /// Returns an error if the token is rejected or the Bot API is unreachable.
    pub async fn new(requester: R, polling_timeout: u64) -> Result<Self, anyhow::Error> {
        let me = requester
            .get_me()
            .await
            .map_err(|e| anyhow!("failed to reach the telegram bot api: {}", e))?;

        let username = me.username.unwrap_or_default();
        info!("logged in as @{} ({})", username, me.id);

        Ok(TelegramClient {
            requester,
            username,
            polling_timeout,
        })
    }

    /// Returns the username of the bot account, without `@`.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Starts the long polling loop.
    ///
    /// Invokes `on_update` for each update and never returns unless the bot
    /// token gets rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Unauthorized`] when polling is no longer possible.
    pub async fn sync<F, Fut>(&self, on_update: F) -> Result<(), TransportError>
    where
        F: Fn(Update) -> Fut,
        Fut: Future<Output = ()>,
    {
        let mut telegram_sync = TelegramSync::new(self.polling_timeout);
        telegram_sync.sync(&self.requester, on_update).await
    }

    /// Sends a Markdown message to a chat, optionally with an inline keyboard.
    ///
    /// # Arguments
    ///
    /// * `chat_id` - The chat to send to
    /// * `body` - The message content (legacy Markdown)
    /// * `keyboard` - Inline keyboard attached to the message
    pub async fn send_text(&self, chat_id: i64, body: &str, keyboard: Option<InlineKeyboardMarkup>) {
        let mut message = SendMessage::new(chat_id, body);
        message.reply_markup = keyboard;

        self.send(&message).await;
    }

    /// Sends a Markdown reply to a specific message.
    ///
    /// # Arguments
    ///
    /// * `chat_id` - The chat of the original message
    /// * `message_id` - The message being replied to
    /// * `body` - The reply content (legacy Markdown)
    pub async fn send_reply(&self, chat_id: i64, message_id: i64, body: &str) {
        let mut message = SendMessage::new(chat_id, body);
        message.reply_parameters = Some(ReplyParameters { message_id });

        self.send(&message).await;
    }

    /// Answers an inline button press.
    ///
    /// # Arguments
    ///
    /// * `callback_query_id` - Identifier of the callback query
    /// * `text` - Notification text, `None` to only stop the loading indicator
    /// * `show_alert` - Show a modal alert instead of a transient notification
    pub async fn answer_callback(&self, callback_query_id: &str, text: Option<&str>, show_alert: bool) {
        let answer = AnswerCallbackQuery {
            callback_query_id: callback_query_id.to_owned(),
            text: text.map(str::to_owned),
            show_alert,
        };

        if let Err(e) = self.requester.answer_callback_query(&answer).await {
            error!("Failed to answer callback query: {}", e);
        }
    }

    /// Internal helper to send a message.
    async fn send(&self, message: &SendMessage) {
        if let Err(e) = self.requester.send_message(message).await {
            error!("Failed to send message to chat {}: {}", message.chat_id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telegram::{InlineKeyboardButton, MockRequester, User};

    fn create_bot_user() -> User {
        User {
            id: 99,
            first_name: "Rollcall".to_owned(),
            last_name: None,
            username: Some("rollcall_bot".to_owned()),
        }
    }

    fn create_mock_requester() -> MockRequester {
        let mut mock_requester = MockRequester::new();
        mock_requester
            .expect_get_me()
            .times(1)
            .returning(|| Ok(create_bot_user()));
        mock_requester
    }

    #[tokio::test]
    async fn test_new_reads_username() {
        let client = TelegramClient::new(create_mock_requester(), 30)
            .await
            .unwrap();
        assert_eq!(client.username(), "rollcall_bot");
    }

    #[tokio::test]
    async fn test_new_fails_on_rejected_token() {
        let mut mock_requester = MockRequester::new();
        mock_requester
            .expect_get_me()
            .times(1)
            .returning(|| Err(TransportError::Unauthorized));

        assert!(TelegramClient::new(mock_requester, 30).await.is_err());
    }

    #[tokio::test]
    async fn test_send_text_with_keyboard() {
        let mut mock_requester = create_mock_requester();
        mock_requester
            .expect_send_message()
            .withf(|message| {
                message.chat_id == -100
                    && message.text == "roster"
                    && message.reply_parameters.is_none()
                    && message
                        .reply_markup
                        .as_ref()
                        .is_some_and(|markup| markup.inline_keyboard.len() == 1)
            })
            .times(1)
            .returning(|_| Ok(()));

        let client = TelegramClient::new(mock_requester, 30).await.unwrap();
        let keyboard = InlineKeyboardMarkup {
            inline_keyboard: vec![vec![InlineKeyboardButton {
                text: "Join".to_owned(),
                callback_data: "join".to_owned(),
            }]],
        };
        client.send_text(-100, "roster", Some(keyboard)).await;
    }

    #[tokio::test]
    async fn test_send_reply_targets_message() {
        let mut mock_requester = create_mock_requester();
        mock_requester
            .expect_send_message()
            .withf(|message| {
                message.chat_id == 5
                    && message.reply_parameters == Some(ReplyParameters { message_id: 42 })
                    && message.reply_markup.is_none()
            })
            .times(1)
            .returning(|_| Ok(()));

        let client = TelegramClient::new(mock_requester, 30).await.unwrap();
        client.send_reply(5, 42, "pong").await;
    }

    #[tokio::test]
    async fn test_send_failure_is_swallowed() {
        let mut mock_requester = create_mock_requester();
        mock_requester
            .expect_send_message()
            .times(1)
            .returning(|_| Err(TransportError::Api("Forbidden (403)".to_owned())));

        let client = TelegramClient::new(mock_requester, 30).await.unwrap();
        client.send_text(-100, "roster", None).await;
    }

    #[tokio::test]
    async fn test_answer_callback() {
        let mut mock_requester = create_mock_requester();
        mock_requester
            .expect_answer_callback_query()
            .withf(|answer| {
                answer.callback_query_id == "cb1"
                    && answer.text.is_none()
                    && !answer.show_alert
            })
            .times(1)
            .returning(|_| Ok(()));

        let client = TelegramClient::new(mock_requester, 30).await.unwrap();
        client.answer_callback("cb1", None, false).await;
    }
}

//! Deserialized Bot API responses.
//!
//! Only the fields used by the bot are kept; everything else sent by Telegram
//! is ignored by serde.

use serde::Deserialize;

use crate::telegram::TransportError;

/// Envelope wrapping every Bot API response.
///
/// ```json
/// { "ok": true, "result": ... }
/// { "ok": false, "error_code": 400, "description": "Bad Request: chat not found" }
/// ```
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
    pub error_code: Option<i64>,
}

impl<T> ApiResponse<T> {
    /// Converts the envelope into its result or a [`TransportError::Api`].
    pub fn into_result(self) -> Result<T, TransportError> {
        match (self.ok, self.result) {
            (true, Some(result)) => Ok(result),
            (true, None) => Err(TransportError::Api("missing result".to_owned())),
            (false, _) => Err(TransportError::Api(format!(
                "{} ({})",
                self.description.unwrap_or_else(|| "unknown error".to_owned()),
                self.error_code.unwrap_or_default()
            ))),
        }
    }
}

/// An incoming update from `getUpdates`.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    /// Monotonic update identifier, used to compute the polling offset
    pub update_id: i64,
    /// New incoming message
    pub message: Option<Message>,
    /// Inline button press
    pub callback_query: Option<CallbackQuery>,
}

/// A chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    /// Sender, empty for channel posts
    pub from: Option<User>,
    pub chat: Chat,
    pub text: Option<String>,
}

/// A chat (private, group, supergroup or channel).
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// A Telegram user or bot.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

impl User {
    /// Returns the display name of the user: first name and, if set, last name.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let user = User {
    ///     id: 1,
    ///     first_name: "Ada".to_owned(),
    ///     last_name: Some("Lovelace".to_owned()),
    ///     username: None,
    /// };
    /// assert_eq!(user.full_name(), "Ada Lovelace");
    /// ```
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last_name) => format!("{} {}", self.first_name, last_name),
            None => self.first_name.clone(),
        }
    }
}

/// A press on an inline keyboard button.
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    /// Identifier to pass to `answerCallbackQuery`
    pub id: String,
    pub from: User,
    /// Message carrying the keyboard
    pub message: Option<Message>,
    /// `callback_data` of the pressed button
    pub data: Option<String>,
}

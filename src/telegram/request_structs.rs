//! Serialized Bot API request bodies.

use serde::Serialize;

/// Body of `getUpdates`.
#[derive(Debug, Serialize)]
pub struct GetUpdates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Long polling timeout in seconds
    pub timeout: u64,
    pub allowed_updates: Vec<String>,
}

/// Body of `sendMessage`.
///
/// Messages are always sent with the legacy `Markdown` parse mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendMessage {
    pub chat_id: i64,
    pub text: String,
    pub parse_mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,
}

impl SendMessage {
    /// Creates a Markdown message for `chat_id`.
    pub fn new(chat_id: i64, text: &str) -> Self {
        SendMessage {
            chat_id,
            text: text.to_owned(),
            parse_mode: "Markdown".to_owned(),
            reply_markup: None,
            reply_parameters: None,
        }
    }
}

/// Message a reply refers to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyParameters {
    pub message_id: i64,
}

/// Inline keyboard attached to a message, as rows of buttons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

/// A button of an inline keyboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    /// Payload sent back in the callback query
    pub callback_data: String,
}

/// Body of `answerCallbackQuery`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerCallbackQuery {
    pub callback_query_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Show a modal alert instead of a transient notification
    pub show_alert: bool,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_serialize_send_message_without_optionals() {
        let message = SendMessage::new(-100, "hello");
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({"chat_id": -100, "text": "hello", "parse_mode": "Markdown"})
        );
    }

    #[test]
    fn test_serialize_send_message_with_keyboard_and_reply() {
        let mut message = SendMessage::new(-100, "hello");
        message.reply_markup = Some(InlineKeyboardMarkup {
            inline_keyboard: vec![vec![InlineKeyboardButton {
                text: "Join".to_owned(),
                callback_data: "join".to_owned(),
            }]],
        });
        message.reply_parameters = Some(ReplyParameters { message_id: 9 });

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "chat_id": -100,
                "text": "hello",
                "parse_mode": "Markdown",
                "reply_markup": {"inline_keyboard": [[{"text": "Join", "callback_data": "join"}]]},
                "reply_parameters": {"message_id": 9}
            })
        );
    }

    #[test]
    fn test_serialize_get_updates_first_poll() {
        let request = GetUpdates {
            offset: None,
            timeout: 30,
            allowed_updates: vec!["message".to_owned()],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"timeout": 30, "allowed_updates": ["message"]})
        );
    }
}

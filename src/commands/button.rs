//! Inline keyboard buttons.
//!
//! Button payloads are the wire contract with Telegram callback queries. They are
//! decoded into a [`Button`] as soon as they arrive and never handled as raw strings.

use crate::telegram::{InlineKeyboardButton, InlineKeyboardMarkup};

const JOIN: &str = "join";
const SPECTATE: &str = "spectate";
const LEAVE: &str = "leave";
/// Payload of the placeholder button shown while registration is closed
const CLOSED: &str = "closed";

/// A pressed inline keyboard button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Button {
    /// Join as a player
    Join,
    /// Join as a spectator
    Spectate,
    /// Leave the roster
    Leave,
    /// Any other payload, including a missing one
    Unrecognized(String),
}

impl Button {
    /// Decodes the `callback_data` of a callback query.
    pub fn from_callback_data(data: Option<&str>) -> Self {
        match data {
            Some(JOIN) => Button::Join,
            Some(SPECTATE) => Button::Spectate,
            Some(LEAVE) => Button::Leave,
            Some(other) => Button::Unrecognized(other.to_owned()),
            None => Button::Unrecognized(String::new()),
        }
    }

    /// Builds the keyboard attached to group broadcasts.
    ///
    /// While registration is open it offers join, spectate and leave, one per row.
    /// While closed it only shows an inert "closed" button.
    pub fn keyboard(registration_open: bool) -> InlineKeyboardMarkup {
        let rows = if registration_open {
            vec![
                vec![button("✅ Join", JOIN)],
                vec![button("👀 Join as spectator", SPECTATE)],
                vec![button("❌ Leave", LEAVE)],
            ]
        } else {
            vec![vec![button("🚫 Registration closed", CLOSED)]]
        };

        InlineKeyboardMarkup {
            inline_keyboard: rows,
        }
    }
}

fn button(text: &str, callback_data: &str) -> InlineKeyboardButton {
    InlineKeyboardButton {
        text: text.to_owned(),
        callback_data: callback_data.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_callback_data_known_buttons() {
        assert_eq!(Button::from_callback_data(Some("join")), Button::Join);
        assert_eq!(Button::from_callback_data(Some("spectate")), Button::Spectate);
        assert_eq!(Button::from_callback_data(Some("leave")), Button::Leave);
    }

    #[test]
    fn test_from_callback_data_unrecognized() {
        assert_eq!(
            Button::from_callback_data(Some("JOIN")),
            Button::Unrecognized("JOIN".to_owned())
        );
        assert_eq!(
            Button::from_callback_data(None),
            Button::Unrecognized(String::new())
        );
    }

    #[test]
    fn test_open_keyboard() {
        let keyboard = Button::keyboard(true);
        let payloads: Vec<&str> = keyboard
            .inline_keyboard
            .iter()
            .flatten()
            .map(|button| button.callback_data.as_str())
            .collect();

        assert_eq!(keyboard.inline_keyboard.len(), 3);
        assert_eq!(payloads, ["join", "spectate", "leave"]);
    }

    #[test]
    fn test_closed_keyboard_is_unrecognized() {
        let keyboard = Button::keyboard(false);
        assert_eq!(keyboard.inline_keyboard.len(), 1);

        let only = &keyboard.inline_keyboard[0][0];
        assert_eq!(
            Button::from_callback_data(Some(&only.callback_data)),
            Button::Unrecognized("closed".to_owned())
        );
    }
}

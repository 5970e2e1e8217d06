//! Markdown response formatters for bot commands.
//!
//! This module provides functions to format bot responses in Telegram legacy
//! Markdown. Callback answers are shown by Telegram as plain text and carry no markup.

use crate::commands::CommandError;
use crate::roster::{EventMetadata, RosterStore};

/// Placeholder of an empty roster section.
const EMPTY_SECTION: &str = "⛔ Nobody has signed up yet.";

/// Formats the help message showing available bot commands.
///
/// # Returns
///
/// A Markdown-formatted string containing the help message.
pub fn format_help() -> String {
    let body = "Commands:\n\
        - `/start`: open registration\n\
        - `/stop`: close registration (admins only)\n\
        - `/list`: show the current roster\n\
        - `/reset`: clear the roster (admins only)\n\
        - `/add <name>`: add a player manually (admins only)\n\
        - `/help`: show this help message\n\n\
        Use the buttons under the roster to join as a player or a spectator, or to leave.";

    body.to_owned()
}

/// Formats the roster of the event.
///
/// Renders the event details followed by the numbered players and spectators.
/// An empty section shows a placeholder.
///
/// # Arguments
///
/// * `roster` - The current roster
/// * `metadata` - Event details, emitted as is so they may contain Markdown
///
/// # Returns
///
/// A Markdown-formatted string ending with a newline.
pub fn format_roster(roster: &RosterStore, metadata: &EventMetadata) -> String {
    format!(
        "📅 *Date:* {}\n\
        ⏰ *Time:* {}\n\
        📍 *Place:* {}\n\
        👥 *Players needed:* {}\n\
        💵 *Price:* {}\n\n\
        {}\n\n\
        *🎭 Players:*\n\
        {}\n\n\
        *👀 Spectators:*\n\
        {}\n",
        metadata.date,
        metadata.time,
        metadata.place,
        metadata.capacity,
        metadata.price,
        metadata.description,
        format_section(roster.players()),
        format_section(roster.spectators()),
    )
}

/// Formats a numbered list of participants, 1-based, in insertion order.
fn format_section(names: &[String]) -> String {
    if names.is_empty() {
        return EMPTY_SECTION.to_owned();
    }

    names
        .iter()
        .enumerate()
        .map(|(index, name)| format!("{}. {}", index + 1, escape_markdown(name)))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Escapes the characters having a meaning in legacy Markdown.
///
/// Display names are chosen by users; an unbalanced `*` or `_` would otherwise
/// make Telegram reject the whole message.
fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Formats the group notice sent when registration opens.
pub fn format_registration_opened() -> String {
    "✅ *Registration is open!*".to_owned()
}

/// Formats the group notice sent when registration closes.
pub fn format_registration_closed() -> String {
    "🚫 *Registration is closed!*".to_owned()
}

/// Formats the group notice sent when the roster is cleared.
pub fn format_roster_cleared() -> String {
    "🗑 *The roster has been cleared!*".to_owned()
}

/// Formats the reply to a non-admin using an admin command.
pub fn format_permission_denied() -> String {
    "🚫 You are not allowed to use this command.".to_owned()
}

/// Formats the usage hint of `/add`.
pub fn format_add_usage() -> String {
    "❌ Usage: `/add John Smith`".to_owned()
}

/// Converts a [`CommandError`] into the reply sent to the user.
pub fn format_command_error(error: &CommandError) -> String {
    match error {
        CommandError::PermissionDenied => format_permission_denied(),
        CommandError::MissingArgument => format_add_usage(),
    }
}

/// Formats the callback answer of a player sign-up.
pub fn format_joined_as_player() -> String {
    "You are registered as a player!".to_owned()
}

/// Formats the callback answer of a spectator sign-up.
pub fn format_joined_as_spectator() -> String {
    "You are registered as a spectator!".to_owned()
}

/// Formats the callback answer of a withdrawal.
pub fn format_left() -> String {
    "You have been removed from the roster.".to_owned()
}

/// Formats the alert shown when a sign-up button is pressed while registration is closed.
pub fn format_registration_closed_alert() -> String {
    "Registration is closed!".to_owned()
}

//! Bot command parsing, routing and response formatting.
//!
//! This module provides the complete processing pipeline for inbound Telegram
//! events, turning commands and inline button presses into roster operations.
//!
//! # Overview
//!
//! 1. **Parsing** - Converting message text into a structured [`command::Command`]
//!    and callback payloads into a [`Button`]
//! 2. **Authorization** - Checking admin-only commands against the configured admin ids
//! 3. **Execution** - Routing to the action handlers, which mutate the [`RosterStore`](crate::roster::RosterStore)
//! 4. **Response** - Formatting the reply to the sender and the group broadcast as Markdown
//!
//! # Architecture
//!
//! ```text
//! Telegram Update
//!      │
//!      ▼
//! ┌─────────────┐
//! │  Commander  │  ← Entry point: parse() + handle_command() / handle_button()
//! └─────────────┘
//!      │
//!      ▼
//! ┌─────────────────────┐
//! │ Action Handlers     │
//! │  - handle_open      │
//! │  - handle_close     │
//! │  - handle_list      │
//! │  - handle_reset     │
//! │  - handle_add       │
//! │  - handle_join      │
//! │  - handle_spectate  │
//! │  - handle_leave     │
//! └─────────────────────┘
//!      │
//!      ▼
//! ┌────────────────────┐
//! │  CommandResult     │
//! │  - reply           │
//! │  - broadcast       │
//! └────────────────────┘
//! ```
//!
//! # Commands
//!
//! | Command | Who | Description |
//! |---------|-----|-------------|
//! | `/start` | anyone, in the event group | Open registration |
//! | `/stop` | admins | Close registration |
//! | `/list` | anyone | Show the roster |
//! | `/reset` | admins | Clear the roster |
//! | `/add <name>` | admins | Add a player, even when registration is closed |
//! | `/help` | anyone | Show the help |
//!
//! # Error Handling
//!
//! Messages that are not commands for this bot are ignored silently. Permission
//! and usage errors ([`CommandError`]) are turned into a reply to the sender;
//! [`RegistrationClosed`](crate::roster::RosterError::RegistrationClosed) is
//! turned into an alert on the pressed button.

mod actions;
mod button;
mod command;
mod commander;
mod markdown_response;

pub use crate::commands::button::Button;
pub use crate::commands::commander::Commander;
use crate::roster::EventMetadata;

/// Runtime context of a command.
///
/// Built by the [`Commander`] for each inbound command.
#[derive(Debug)]
pub struct CommandContext<'a> {
    /// Chat the command was sent in
    pub chat_id: i64,
    /// Telegram user id of the sender
    pub sender_id: i64,
    /// Whether the sender is in the configured admin set
    pub is_admin: bool,
    /// Whether the command was sent in the event group
    pub from_group: bool,
    /// Event description used to render the roster
    pub metadata: &'a EventMetadata,
}

/// Answer to the sender of a command or the presser of a button.
#[derive(Debug, PartialEq, Eq)]
pub struct Reply {
    /// Markdown text for commands, plain text for button answers
    pub text: String,
    /// Show the button answer as a modal alert
    pub alert: bool,
}

impl Reply {
    /// Creates a regular reply.
    pub fn new(text: String) -> Self {
        Reply { text, alert: false }
    }

    /// Creates a button answer shown as an alert.
    pub fn alert(text: String) -> Self {
        Reply { text, alert: true }
    }
}

/// Result of command execution.
///
/// Handlers mutate the roster they are given and describe the messages to send.
/// The caller sends the broadcast with the registration keyboard while still
/// holding the roster lock.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Reply to the sender, if any
    pub reply: Option<Reply>,
    /// Markdown message to publish to the event group, if any
    pub broadcast: Option<String>,
}

/// User-facing errors of command handlers.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The command is reserved to admins
    PermissionDenied,
    /// `/add` was sent without a name
    MissingArgument,
}

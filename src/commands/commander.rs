//! Command orchestration and execution.
//!
//! This module provides the [`Commander`] struct, which serves as the main entry point
//! for processing bot commands and button presses. It coordinates parsing,
//! authorization and execution, routing each event to its handler.
//!
//! # Architecture
//!
//! The Commander follows a two-phase processing model:
//!
//! 1. **Parsing Phase** - Validates and parses raw message text into structured [`Command`] enums
//! 2. **Execution Phase** - Routes parsed commands to specialized handlers that produce results
//!
//! # Flow
//!
//! ```text
//! Telegram Message  → parse() → Command → handle_command() → CommandResult
//! Telegram Callback → Button::from_callback_data() → handle_button() → CommandResult
//! ```

use std::collections::HashSet;

use command_parser::Parser;

use crate::commands::{
    Button, CommandContext, CommandResult, Reply,
    actions::{
        handle_add, handle_close, handle_help, handle_join, handle_leave, handle_list,
        handle_open, handle_reset, handle_spectate,
    },
    command::{Command, CommandParsingError},
    markdown_response::format_command_error,
};
use crate::roster::{EventMetadata, RosterStore};

/// Command orchestrator for parsing and executing bot commands.
///
/// The Commander is responsible for:
/// - Parsing raw message text into structured commands
/// - Checking admin rights and the origin chat
/// - Routing commands and buttons to appropriate handlers
/// - Converting errors into user-friendly messages
///
/// It holds no roster state: the caller passes the locked roster in.
pub struct Commander {
    /// Command parser for processing user commands
    parser: Parser,
    /// Username of the bot, to accept `/command@username`
    username: String,
    /// Event group, where `/start` is accepted and broadcasts are sent
    group_chat_id: i64,
    /// Telegram user ids allowed to use admin commands
    admin_ids: HashSet<i64>,
    /// Event details shown in the roster
    metadata: EventMetadata,
}

impl Commander {
    /// Creates a new Commander instance with a configured command parser.
    ///
    /// The parser recognizes commands starting with `/`, and `-` as the option prefix.
    ///
    /// # Arguments
    ///
    /// * `username` - Username of the bot account, without `@`
    /// * `group_chat_id` - Chat id of the event group
    /// * `admin_ids` - Telegram user ids of the administrators
    /// * `metadata` - Event details
    pub fn new(
        username: &str,
        group_chat_id: i64,
        admin_ids: HashSet<i64>,
        metadata: EventMetadata,
    ) -> Self {
        let parser = Parser::new('/', '-');
        Commander {
            parser,
            username: username.to_owned(),
            group_chat_id,
            admin_ids,
            metadata,
        }
    }

    /// Returns the chat id of the event group.
    pub fn group_chat_id(&self) -> i64 {
        self.group_chat_id
    }

    /// Parses a Telegram message text into a structured command.
    ///
    /// # Returns
    ///
    /// * `Ok(Command)` - A command for this bot
    /// * `Err(CommandParsingError)` - Plain text, unknown commands, or commands
    ///   for another bot; the message must be ignored
    pub fn parse(&self, body: &str) -> Result<Command, CommandParsingError> {
        Command::parse(&self.parser, body, &self.username)
    }

    /// Executes a parsed command against the roster and returns the result.
    ///
    /// # Arguments
    ///
    /// * `command` - The parsed command to execute
    /// * `chat_id` - Chat the command was sent in
    /// * `sender_id` - Telegram user id of the sender
    /// * `roster` - The roster, locked by the caller
    ///
    /// # Command Handlers
    ///
    /// - [`Command::Help`] → [`handle_help`]
    /// - [`Command::Open`] → [`handle_open`]
    /// - [`Command::Close`] → [`handle_close`]
    /// - [`Command::List`] → [`handle_list`]
    /// - [`Command::Reset`] → [`handle_reset`]
    /// - [`Command::Add`] → [`handle_add`]
    pub fn handle_command(
        &self,
        command: &Command,
        chat_id: i64,
        sender_id: i64,
        roster: &mut RosterStore,
    ) -> CommandResult {
        let context = CommandContext {
            chat_id,
            sender_id,
            is_admin: self.admin_ids.contains(&sender_id),
            from_group: chat_id == self.group_chat_id,
            metadata: &self.metadata,
        };

        let result = match command {
            Command::Help => Ok(handle_help()),
            Command::Open => Ok(handle_open(&context, roster)),
            Command::Close => handle_close(&context, roster),
            Command::List => Ok(handle_list(&context, roster)),
            Command::Reset => handle_reset(&context, roster),
            Command::Add(player_name) => handle_add(&context, roster, player_name.as_deref()),
        };

        result.unwrap_or_else(|error| CommandResult {
            reply: Some(Reply::new(format_command_error(&error))),
            broadcast: None,
        })
    }

    /// Executes a button press against the roster and returns the result.
    ///
    /// Unrecognized buttons get an empty answer and change nothing.
    ///
    /// # Arguments
    ///
    /// * `button` - The decoded button
    /// * `presser_name` - Display name of the user who pressed it
    /// * `roster` - The roster, locked by the caller
    pub fn handle_button(
        &self,
        button: &Button,
        presser_name: &str,
        roster: &mut RosterStore,
    ) -> CommandResult {
        match button {
            Button::Join => handle_join(roster, presser_name, &self.metadata),
            Button::Spectate => handle_spectate(roster, presser_name, &self.metadata),
            Button::Leave => handle_leave(roster, presser_name, &self.metadata),
            Button::Unrecognized(_) => CommandResult::default(),
        }
    }
}

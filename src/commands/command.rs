//! Command parsing.
//!
//! This module converts Telegram message text into structured [`Command`] enums.
//! Telegram commands look like `/name args…`, optionally addressed to a bot with
//! `/name@bot_username`.

use command_parser::Parser;
use log::debug;

/// Represents a parsed bot command.
#[derive(Debug, Hash, PartialEq, Eq)]
pub enum Command {
    /// Display help information
    Help,
    /// Open registration (`/start`)
    Open,
    /// Close registration (`/stop`)
    Close,
    /// Show the roster
    List,
    /// Clear the roster
    Reset,
    /// Add a player manually
    ///
    /// # Fields
    ///
    /// * `Option<String>` - Name of the player, `None` when missing or blank
    Add(Option<String>),
}

/// Errors that can occur during command parsing.
///
/// None of them produces a reply: the message is simply not for the bot.
#[derive(Debug)]
pub enum CommandParsingError {
    /// The message could not be parsed as a command
    UnableToParse,
    /// The command is addressed to another bot
    NotForThisBot,
    /// The command is not recognized
    Unknown,
}

impl Command {
    /// Parses a message string into a Command.
    ///
    /// # Arguments
    ///
    /// * `parser` - The command parser instance configured for the bot
    /// * `body` - The message text to parse
    /// * `username` - Username of the bot, to accept `/command@username`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The message is not a command - [`CommandParsingError::UnableToParse`]
    /// - The command targets another bot - [`CommandParsingError::NotForThisBot`]
    /// - The command is not recognized - [`CommandParsingError::Unknown`]
    pub fn parse(parser: &Parser, body: &str, username: &str) -> Result<Self, CommandParsingError> {
        // The parser only splits on spaces, so the command word is cut out first
        let Some(command_word) = body.split_whitespace().next() else {
            return Err(CommandParsingError::UnableToParse);
        };

        // The parser ignores the last word, so we add a dummy word at the end
        let padded_body = command_word.to_string() + " dummy";

        // This is normal to fail if the message is not a command
        let command = match parser.parse(&padded_body) {
            Ok(cmd) => cmd,
            Err(_) => return Err(CommandParsingError::UnableToParse),
        };

        debug!("Parsing command: {:?}", command);

        let name = match command.name.split_once('@') {
            Some((name, target)) if target.eq_ignore_ascii_case(username) => name,
            Some(_) => return Err(CommandParsingError::NotForThisBot),
            None => command.name.as_str(),
        };

        match name {
            "help" => Ok(Command::Help),
            "start" => Ok(Command::Open),
            "stop" => Ok(Command::Close),
            "list" => Ok(Command::List),
            "reset" => Ok(Command::Reset),
            "add" => Ok(Command::Add(Self::parse_add(body))),
            _ => Err(CommandParsingError::Unknown),
        }
    }

    /// Extracts the player name of an `/add` command.
    ///
    /// The name is everything after the command word, trimmed, so that names
    /// made of several words are kept whole.
    fn parse_add(body: &str) -> Option<String> {
        let player_name = body
            .trim_start()
            .split_once(char::is_whitespace)
            .map(|(_, rest)| rest.trim())
            .filter(|rest| !rest.is_empty())
            .map(str::to_owned);

        debug!("Parsed add command - player_name: {:?}", player_name);

        player_name
    }
}

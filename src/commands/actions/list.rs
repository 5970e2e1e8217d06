//! Roster listing handler.

use log::debug;

use crate::commands::{CommandContext, CommandResult, Reply, markdown_response::format_roster};
use crate::roster::RosterStore;

/// Replies with the rendered roster. Read-only, available to everyone.
pub fn handle_list(context: &CommandContext, roster: &RosterStore) -> CommandResult {
    debug!("handling list command from chat {}", context.chat_id);

    CommandResult {
        reply: Some(Reply::new(format_roster(roster, context.metadata))),
        broadcast: None,
    }
}

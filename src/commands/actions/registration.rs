//! Registration open and close handlers.
//!
//! Anyone in the event group may open registration with `/start`; only admins
//! may close it with `/stop`. Both announce the new state to the group.

use log::debug;

use crate::commands::{
    CommandContext, CommandError, CommandResult,
    actions::ensure_admin,
    markdown_response::{format_registration_closed, format_registration_opened},
};
use crate::roster::RosterStore;

/// Opens registration when `/start` is sent in the event group.
///
/// Sent from any other chat, the command is ignored.
pub fn handle_open(context: &CommandContext, roster: &mut RosterStore) -> CommandResult {
    debug!("handling open command from chat {}", context.chat_id);

    if !context.from_group {
        debug!("ignoring open command outside of the event group");
        return CommandResult::default();
    }

    roster.open_registration();

    CommandResult {
        reply: None,
        broadcast: Some(format_registration_opened()),
    }
}

/// Closes registration.
///
/// # Errors
///
/// Returns [`CommandError::PermissionDenied`] if the sender is not an admin.
pub fn handle_close(
    context: &CommandContext,
    roster: &mut RosterStore,
) -> Result<CommandResult, CommandError> {
    debug!("handling close command from user {}", context.sender_id);

    ensure_admin(context)?;
    roster.close_registration();

    Ok(CommandResult {
        reply: None,
        broadcast: Some(format_registration_closed()),
    })
}

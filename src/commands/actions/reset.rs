//! Roster reset handler.

use log::debug;

use crate::commands::{
    CommandContext, CommandError, CommandResult, actions::ensure_admin,
    markdown_response::format_roster_cleared,
};
use crate::roster::RosterStore;

/// Empties both lists. The registration state is kept.
///
/// # Errors
///
/// Returns [`CommandError::PermissionDenied`] if the sender is not an admin.
pub fn handle_reset(
    context: &CommandContext,
    roster: &mut RosterStore,
) -> Result<CommandResult, CommandError> {
    debug!("handling reset command from user {}", context.sender_id);

    ensure_admin(context)?;
    roster.reset_roster();

    Ok(CommandResult {
        reply: None,
        broadcast: Some(format_roster_cleared()),
    })
}

//! Manual player addition handler.
//!
//! Lets admins add someone who cannot press the buttons themselves. The
//! registration state is not checked: admins may add players after closing.

use log::debug;

use crate::commands::{
    CommandContext, CommandError, CommandResult, actions::ensure_admin,
    markdown_response::format_roster,
};
use crate::roster::RosterStore;

/// Adds `player_name` to the players.
///
/// The roster is broadcast only when the player was not already listed.
///
/// # Errors
///
/// - [`CommandError::PermissionDenied`] if the sender is not an admin
/// - [`CommandError::MissingArgument`] if no name was given
pub fn handle_add(
    context: &CommandContext,
    roster: &mut RosterStore,
    player_name: Option<&str>,
) -> Result<CommandResult, CommandError> {
    debug!("handling add command: {:?}", player_name);

    ensure_admin(context)?;
    let player_name = player_name.ok_or(CommandError::MissingArgument)?;

    let broadcast = roster
        .add_player_manually(player_name)
        .then(|| format_roster(roster, context.metadata));

    Ok(CommandResult {
        reply: None,
        broadcast,
    })
}

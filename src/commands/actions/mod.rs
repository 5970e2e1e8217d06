//! Command action handlers.
//!
//! Individual handler functions for each bot command and button. Each handler
//! receives the roster to operate on and returns a
//! [`CommandResult`](crate::commands::CommandResult).
//!
//! # Handler Pattern
//!
//! Handlers follow a consistent pattern:
//! 1. Check the preconditions (admin rights, origin chat)
//! 2. Apply the roster operation
//! 3. Return the reply and the group broadcast, if any
//!
//! # Available Handlers
//!
//! - [`handle_help`] - Display help information
//! - [`handle_open`] - Open registration
//! - [`handle_close`] - Close registration
//! - [`handle_list`] - Render the roster
//! - [`handle_reset`] - Clear the roster
//! - [`handle_add`] - Add a player manually
//! - [`handle_join`] - Join as a player from a button
//! - [`handle_spectate`] - Join as a spectator from a button
//! - [`handle_leave`] - Leave the roster from a button
//!
//! # Errors
//!
//! Admin commands return a [`CommandError`](crate::commands::CommandError) that
//! the [`Commander`](crate::commands::Commander) turns into a reply.

mod add;
mod help;
mod list;
mod participation;
mod registration;
mod reset;

use log::warn;

pub use crate::commands::actions::{
    add::handle_add,
    help::handle_help,
    list::handle_list,
    participation::{handle_join, handle_leave, handle_spectate},
    registration::{handle_close, handle_open},
    reset::handle_reset,
};
use crate::commands::{CommandContext, CommandError};

/// Fails with [`CommandError::PermissionDenied`] unless the sender is an admin.
fn ensure_admin(context: &CommandContext) -> Result<(), CommandError> {
    if context.is_admin {
        return Ok(());
    }

    warn!(
        "user {} is not allowed to use an admin command in chat {}",
        context.sender_id, context.chat_id
    );
    Err(CommandError::PermissionDenied)
}

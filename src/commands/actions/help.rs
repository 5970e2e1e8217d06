//! Help command handler.
//!
//! Stateless: always replies with the same list of commands.

use log::debug;

use crate::commands::{CommandResult, Reply, markdown_response::format_help};

/// Returns formatted help information about available commands.
pub fn handle_help() -> CommandResult {
    debug!("handling help command");

    CommandResult {
        reply: Some(Reply::new(format_help())),
        broadcast: None,
    }
}

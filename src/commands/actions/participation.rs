//! Inline button handlers.
//!
//! Buttons sign the presser up as a player or a spectator, or take them off the
//! roster. The presser is identified by their display name. Every press gets a
//! callback answer so the client stops its loading indicator.

use log::debug;

use crate::commands::{
    CommandResult, Reply,
    markdown_response::{
        format_joined_as_player, format_joined_as_spectator, format_left,
        format_registration_closed_alert, format_roster,
    },
};
use crate::roster::{EventMetadata, RosterError, RosterStore};

/// Signs `name` up as a player.
///
/// The roster is broadcast only if it changed. While registration is closed the
/// presser gets an alert and nothing changes.
pub fn handle_join(roster: &mut RosterStore, name: &str, metadata: &EventMetadata) -> CommandResult {
    debug!("handling join button from {}", name);

    let joined = roster.join_as_player(name);
    into_result(joined, format_joined_as_player(), roster, metadata)
}

/// Signs `name` up as a spectator. Same rules as [`handle_join`].
pub fn handle_spectate(
    roster: &mut RosterStore,
    name: &str,
    metadata: &EventMetadata,
) -> CommandResult {
    debug!("handling spectate button from {}", name);

    let joined = roster.join_as_spectator(name);
    into_result(joined, format_joined_as_spectator(), roster, metadata)
}

/// Removes `name` from the roster.
///
/// Accepted whether registration is open or not, and always broadcast.
pub fn handle_leave(roster: &mut RosterStore, name: &str, metadata: &EventMetadata) -> CommandResult {
    debug!("handling leave button from {}", name);

    roster.leave(name);

    CommandResult {
        reply: Some(Reply::new(format_left())),
        broadcast: Some(format_roster(roster, metadata)),
    }
}

fn into_result(
    joined: Result<bool, RosterError>,
    answer: String,
    roster: &RosterStore,
    metadata: &EventMetadata,
) -> CommandResult {
    match joined {
        Ok(mutated) => CommandResult {
            reply: Some(Reply::new(answer)),
            broadcast: mutated.then(|| format_roster(roster, metadata)),
        },
        Err(RosterError::RegistrationClosed) => CommandResult {
            reply: Some(Reply::alert(format_registration_closed_alert())),
            broadcast: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_join() {
        let metadata = EventMetadata::default();
        let mut roster = RosterStore::new();

        let result = handle_join(&mut roster, "Alice", &metadata);

        assert_eq!(roster.players(), ["Alice"]);
        assert_eq!(result.reply, Some(Reply::new(format_joined_as_player())));
        assert_eq!(result.broadcast, Some(format_roster(&roster, &metadata)));
    }

    #[test]
    fn test_handle_join_twice_broadcasts_once() {
        let metadata = EventMetadata::default();
        let mut roster = RosterStore::new();

        handle_join(&mut roster, "Alice", &metadata);
        let result = handle_join(&mut roster, "Alice", &metadata);

        assert_eq!(roster.players(), ["Alice"]);
        assert_eq!(result.reply, Some(Reply::new(format_joined_as_player())));
        assert!(result.broadcast.is_none());
    }

    #[test]
    fn test_handle_join_while_closed() {
        let metadata = EventMetadata::default();
        let mut roster = RosterStore::new();
        roster.close_registration();

        let result = handle_join(&mut roster, "Alice", &metadata);

        assert!(roster.players().is_empty());
        assert_eq!(
            result.reply,
            Some(Reply::alert(format_registration_closed_alert()))
        );
        assert!(result.broadcast.is_none());
    }

    #[test]
    fn test_handle_spectate_moves_player() {
        let metadata = EventMetadata::default();
        let mut roster = RosterStore::new();
        roster.join_as_player("Alice").unwrap();

        let result = handle_spectate(&mut roster, "Alice", &metadata);

        assert!(roster.players().is_empty());
        assert_eq!(roster.spectators(), ["Alice"]);
        assert_eq!(result.reply, Some(Reply::new(format_joined_as_spectator())));
        assert!(result.broadcast.is_some());
    }

    #[test]
    fn test_handle_spectate_while_closed() {
        let metadata = EventMetadata::default();
        let mut roster = RosterStore::new();
        roster.close_registration();

        let result = handle_spectate(&mut roster, "Alice", &metadata);

        assert!(roster.spectators().is_empty());
        assert!(result.reply.unwrap().alert);
        assert!(result.broadcast.is_none());
    }

    #[test]
    fn test_handle_leave_always_broadcasts() {
        let metadata = EventMetadata::default();
        let mut roster = RosterStore::new();

        // Not on the roster
        let result = handle_leave(&mut roster, "Alice", &metadata);
        assert_eq!(result.reply, Some(Reply::new(format_left())));
        assert_eq!(result.broadcast, Some(format_roster(&roster, &metadata)));

        // On the roster, registration closed
        roster.join_as_spectator("Alice").unwrap();
        roster.close_registration();
        let result = handle_leave(&mut roster, "Alice", &metadata);
        assert!(roster.spectators().is_empty());
        assert!(result.broadcast.is_some());
    }
}

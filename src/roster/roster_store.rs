//! Player and spectator lists with the registration gate.
//!
//! This module provides the [`RosterStore`], the single owner of the roster state.

use log::{debug, info};

use crate::roster::RosterError;

/// Roster of the current event.
///
/// Keeps two ordered lists of participant display names and the registration
/// flag. Insertion order is display order.
///
/// # Thread Safety
///
/// Operations take `&mut self` and are not synchronized. The bot keeps the store
/// behind a `tokio::sync::Mutex` and holds the lock for the whole
/// operation-plus-broadcast sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterStore {
    /// Participants registered as players
    players: Vec<String>,
    /// Participants registered as spectators
    spectators: Vec<String>,
    /// Whether self-service registration is accepted
    registration_open: bool,
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterStore {
    /// Creates an empty roster with registration open.
    pub fn new() -> Self {
        RosterStore {
            players: Vec::new(),
            spectators: Vec::new(),
            registration_open: true,
        }
    }

    /// Returns the players in registration order.
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// Returns the spectators in registration order.
    pub fn spectators(&self) -> &[String] {
        &self.spectators
    }

    /// Returns whether self-service registration is accepted.
    pub fn is_registration_open(&self) -> bool {
        self.registration_open
    }

    /// Opens registration.
    pub fn open_registration(&mut self) {
        self.registration_open = true;
        info!("registration opened");
    }

    /// Closes registration.
    ///
    /// The lists are kept; participants can still leave.
    pub fn close_registration(&mut self) {
        self.registration_open = false;
        info!("registration closed");
    }

    /// Registers `name` as a player.
    ///
    /// Moves the participant out of the spectators if needed.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The roster changed
    /// * `Ok(false)` - The participant was already a player
    /// * `Err(RosterError::RegistrationClosed)` - Registration is closed, nothing changed
    pub fn join_as_player(&mut self, name: &str) -> Result<bool, RosterError> {
        if !self.registration_open {
            debug!("{} tried to join as player while registration is closed", name);
            return Err(RosterError::RegistrationClosed);
        }

        Ok(self.insert_player(name))
    }

    /// Registers `name` as a spectator.
    ///
    /// Symmetric to [`RosterStore::join_as_player`].
    pub fn join_as_spectator(&mut self, name: &str) -> Result<bool, RosterError> {
        if !self.registration_open {
            debug!(
                "{} tried to join as spectator while registration is closed",
                name
            );
            return Err(RosterError::RegistrationClosed);
        }

        if self.spectators.iter().any(|spectator| spectator == name) {
            return Ok(false);
        }

        self.spectators.push(name.to_owned());
        self.players.retain(|player| player != name);
        info!("{} joined as spectator", name);

        Ok(true)
    }

    /// Removes `name` from both lists.
    ///
    /// Not gated by the registration flag. Removing an absent participant is a no-op.
    ///
    /// # Returns
    ///
    /// `true` if the participant was in one of the lists.
    pub fn leave(&mut self, name: &str) -> bool {
        let before = self.players.len() + self.spectators.len();

        self.players.retain(|player| player != name);
        self.spectators.retain(|spectator| spectator != name);

        let removed = before != self.players.len() + self.spectators.len();
        if removed {
            info!("{} left the roster", name);
        }

        removed
    }

    /// Registers `name` as a player regardless of the registration flag.
    ///
    /// Administrator override of [`RosterStore::join_as_player`].
    ///
    /// # Returns
    ///
    /// `true` if the roster changed.
    pub fn add_player_manually(&mut self, name: &str) -> bool {
        self.insert_player(name)
    }

    /// Clears both lists. The registration flag is left untouched.
    pub fn reset_roster(&mut self) {
        self.players.clear();
        self.spectators.clear();
        info!("roster cleared");
    }

    fn insert_player(&mut self, name: &str) -> bool {
        if self.players.iter().any(|player| player == name) {
            return false;
        }

        self.players.push(name.to_owned());
        self.spectators.retain(|spectator| spectator != name);
        info!("{} joined as player", name);

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug)]
    enum Operation {
        Join,
        Spectate,
        Leave,
        Add,
        Open,
        Close,
    }

    const OPERATIONS: [Operation; 6] = [
        Operation::Join,
        Operation::Spectate,
        Operation::Leave,
        Operation::Add,
        Operation::Open,
        Operation::Close,
    ];

    fn apply(roster: &mut RosterStore, operation: Operation, name: &str) {
        match operation {
            Operation::Join => {
                let _ = roster.join_as_player(name);
            }
            Operation::Spectate => {
                let _ = roster.join_as_spectator(name);
            }
            Operation::Leave => {
                roster.leave(name);
            }
            Operation::Add => {
                roster.add_player_manually(name);
            }
            Operation::Open => roster.open_registration(),
            Operation::Close => roster.close_registration(),
        }
    }

    fn assert_invariants(roster: &RosterStore) {
        for player in roster.players() {
            assert!(
                !roster.spectators().contains(player),
                "{player} is both player and spectator"
            );
            assert_eq!(roster.players().iter().filter(|p| *p == player).count(), 1);
        }
        for spectator in roster.spectators() {
            assert_eq!(
                roster
                    .spectators()
                    .iter()
                    .filter(|s| *s == spectator)
                    .count(),
                1
            );
        }
    }

    #[test]
    fn test_new_roster_is_empty_and_open() {
        let roster = RosterStore::new();
        assert!(roster.players().is_empty());
        assert!(roster.spectators().is_empty());
        assert!(roster.is_registration_open());
    }

    #[test]
    fn test_join_as_player_appends_in_order() {
        let mut roster = RosterStore::new();
        assert_eq!(roster.join_as_player("Alice"), Ok(true));
        assert_eq!(roster.join_as_player("Bob"), Ok(true));
        assert_eq!(roster.players(), ["Alice", "Bob"]);
    }

    #[test]
    fn test_join_as_player_twice_is_noop() {
        let mut roster = RosterStore::new();
        roster.join_as_player("Alice").unwrap();
        assert_eq!(roster.join_as_player("Alice"), Ok(false));
        assert_eq!(roster.players(), ["Alice"]);
    }

    #[test]
    fn test_join_as_spectator_twice_is_noop() {
        let mut roster = RosterStore::new();
        roster.join_as_spectator("Alice").unwrap();
        assert_eq!(roster.join_as_spectator("Alice"), Ok(false));
        assert_eq!(roster.spectators(), ["Alice"]);
    }

    #[test]
    fn test_player_then_spectator_moves_to_spectators() {
        let mut roster = RosterStore::new();
        roster.join_as_player("Alice").unwrap();
        assert_eq!(roster.join_as_spectator("Alice"), Ok(true));
        assert!(roster.players().is_empty());
        assert_eq!(roster.spectators(), ["Alice"]);
    }

    #[test]
    fn test_spectator_then_player_moves_to_players() {
        let mut roster = RosterStore::new();
        roster.join_as_spectator("Alice").unwrap();
        roster.join_as_spectator("Bob").unwrap();
        assert_eq!(roster.join_as_player("Alice"), Ok(true));
        assert_eq!(roster.players(), ["Alice"]);
        assert_eq!(roster.spectators(), ["Bob"]);
    }

    #[test]
    fn test_joins_rejected_when_closed() {
        let mut roster = RosterStore::new();
        roster.join_as_player("Alice").unwrap();
        roster.close_registration();
        let before = roster.clone();

        assert_eq!(
            roster.join_as_player("Bob"),
            Err(RosterError::RegistrationClosed)
        );
        assert_eq!(
            roster.join_as_spectator("Alice"),
            Err(RosterError::RegistrationClosed)
        );
        assert_eq!(roster, before);
    }

    #[test]
    fn test_leave_allowed_when_closed() {
        let mut roster = RosterStore::new();
        roster.join_as_player("Alice").unwrap();
        roster.close_registration();

        assert!(roster.leave("Alice"));
        assert!(roster.players().is_empty());
        assert!(!roster.is_registration_open());
    }

    #[test]
    fn test_leave_is_idempotent() {
        let mut roster = RosterStore::new();
        roster.join_as_player("Alice").unwrap();
        roster.join_as_spectator("Bob").unwrap();

        assert!(roster.leave("Alice"));
        let once = roster.clone();
        assert!(!roster.leave("Alice"));
        assert_eq!(roster, once);
    }

    #[test]
    fn test_leave_absent_is_noop() {
        let mut roster = RosterStore::new();
        roster.join_as_player("Alice").unwrap();
        assert!(!roster.leave("Bob"));
        assert_eq!(roster.players(), ["Alice"]);
    }

    #[test]
    fn test_add_player_manually_bypasses_gate() {
        let mut roster = RosterStore::new();
        roster.close_registration();

        assert!(roster.add_player_manually("Bob"));
        assert_eq!(roster.players(), ["Bob"]);
        assert!(!roster.is_registration_open());
    }

    #[test]
    fn test_add_player_manually_existing_is_noop() {
        let mut roster = RosterStore::new();
        roster.join_as_player("Bob").unwrap();
        assert!(!roster.add_player_manually("Bob"));
        assert_eq!(roster.players(), ["Bob"]);
    }

    #[test]
    fn test_add_player_manually_moves_spectator() {
        let mut roster = RosterStore::new();
        roster.join_as_spectator("Bob").unwrap();
        assert!(roster.add_player_manually("Bob"));
        assert_eq!(roster.players(), ["Bob"]);
        assert!(roster.spectators().is_empty());
    }

    #[test]
    fn test_reset_roster_keeps_flag() {
        let mut roster = RosterStore::new();
        roster.join_as_player("Alice").unwrap();
        roster.join_as_spectator("Bob").unwrap();
        roster.close_registration();

        roster.reset_roster();

        assert!(roster.players().is_empty());
        assert!(roster.spectators().is_empty());
        assert!(!roster.is_registration_open());
    }

    #[test]
    fn test_open_registration_after_close() {
        let mut roster = RosterStore::new();
        roster.close_registration();
        roster.open_registration();
        assert!(roster.is_registration_open());
        assert_eq!(roster.join_as_player("Alice"), Ok(true));
    }

    #[test]
    fn test_all_operation_sequences_keep_invariants() {
        let names = ["Alice", "Bob"];
        let steps: Vec<(Operation, &str)> = OPERATIONS
            .iter()
            .flat_map(|operation| names.iter().map(move |name| (*operation, *name)))
            .collect();

        // Every sequence of four steps over two participants
        for a in &steps {
            for b in &steps {
                for c in &steps {
                    for d in &steps {
                        let mut roster = RosterStore::new();
                        for (operation, name) in [a, b, c, d] {
                            apply(&mut roster, *operation, name);
                            assert_invariants(&roster);
                        }
                    }
                }
            }
        }
    }
}

//! Event roster and its registration gate.
//!
//! This module holds the domain state of the bot:
//!
//! - [`RosterStore`]: the player and spectator lists plus the registration flag
//! - [`EventMetadata`]: the immutable description of the event, loaded from configuration
//!
//! # Invariants
//!
//! A participant appears in at most one of the two lists, never twice in the same
//! list. Every mutation goes through a [`RosterStore`] operation; the store itself
//! is not synchronized and must be guarded by the caller (see [`crate::bot`]).
//!
//! # Example
//!
//! ```ignore
//! let mut roster = RosterStore::new();
//! roster.join_as_player("Alice").unwrap();
//! roster.join_as_spectator("Alice").unwrap();
//! assert!(roster.players().is_empty());
//! ```

mod event_metadata;
mod roster_store;

pub use crate::roster::{event_metadata::EventMetadata, roster_store::RosterStore};

/// Errors raised by roster operations.
///
/// Only the self-service join operations can fail; leaving and the
/// administrator override always succeed.
#[derive(Debug, PartialEq, Eq)]
pub enum RosterError {
    /// Registration is closed, self-service joins are rejected
    RegistrationClosed,
}

//! Persistence collaborator: the narrow repository the tournament reads and writes through.

mod memory;

pub use memory::MemoryStore;

use crate::models::{MatchId, MatchResult, Player, PlayerId};
use thiserror::Error;

/// Errors raised by a repository. Never produced by the pure standings/pairing code.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage lock poisoned")]
    LockPoisoned,

    #[error("no player with id {0}")]
    UnknownPlayer(PlayerId),

    #[error("player {0} cannot play against themselves")]
    SelfMatch(PlayerId),

    #[error("cannot delete players while {results} match results reference them")]
    PlayersReferenced { results: usize },
}

/// Record store for players and match results.
///
/// Implementations own their own synchronisation; every method takes `&self` so
/// one long-lived repository can be shared across request handlers.
pub trait Repository {
    /// All registered players, in registration order.
    fn list_players(&self) -> Result<Vec<Player>, StorageError>;

    /// Every recorded result, two per reported match.
    fn list_results(&self) -> Result<Vec<MatchResult>, StorageError>;

    /// Register a player and assign it a fresh id.
    fn add_player(&self, name: &str) -> Result<Player, StorageError>;

    /// Append the win and loss records of one match as a single unit.
    fn add_result(&self, winner: PlayerId, loser: PlayerId) -> Result<MatchId, StorageError>;

    fn clear_results(&self) -> Result<(), StorageError>;

    fn clear_players(&self) -> Result<(), StorageError>;

    fn count_players(&self) -> Result<usize, StorageError>;

    /// Players and results read together. Stores that can should read both
    /// under one lock or transaction so a concurrent report is seen whole or not at all.
    fn snapshot(&self) -> Result<(Vec<Player>, Vec<MatchResult>), StorageError> {
        Ok((self.list_players()?, self.list_results()?))
    }
}

//! Tournament: the repository plus the operations callers use to run a Swiss event.

use crate::logic::{compute_pairings, compute_standings};
use crate::models::game::MatchId;
use crate::models::player::{Player, PlayerId};
use crate::models::standing::{Pairing, Standing};
use crate::store::{Repository, StorageError};
use thiserror::Error;

/// Errors that can occur during tournament operations.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Player name is empty after trimming.
    #[error("Player name must not be empty")]
    EmptyName,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl TournamentError {
    /// True when the caller sent something the tournament refuses (as opposed to a storage fault).
    pub fn is_rejection(&self) -> bool {
        !matches!(self, TournamentError::Storage(StorageError::LockPoisoned))
    }
}

/// A Swiss tournament backed by a long-lived repository.
///
/// Standings and pairings are recomputed from the repository on every call, so a
/// reported match is visible to the very next read.
#[derive(Debug)]
pub struct Tournament<R> {
    store: R,
}

impl<R: Repository> Tournament<R> {
    pub fn new(store: R) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    /// Register a player. Names are trimmed and need not be unique.
    pub fn register_player(&self, name: &str) -> Result<Player, TournamentError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        let player = self.store.add_player(name)?;
        log::info!("Registered player {} ({})", player.id, player.name);
        Ok(player)
    }

    /// Record that `winner` beat `loser`.
    pub fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<MatchId, TournamentError> {
        let match_id = self.store.add_result(winner, loser)?;
        log::info!("Match {}: player {} beat player {}", match_id, winner, loser);
        Ok(match_id)
    }

    /// Remove all match results.
    pub fn delete_matches(&self) -> Result<(), TournamentError> {
        self.store.clear_results()?;
        log::info!("Deleted all match results");
        Ok(())
    }

    /// Remove all players. Fails while match results still reference them.
    pub fn delete_players(&self) -> Result<(), TournamentError> {
        self.store.clear_players()?;
        log::info!("Deleted all players");
        Ok(())
    }

    pub fn count_players(&self) -> Result<usize, TournamentError> {
        Ok(self.store.count_players()?)
    }

    /// Current standings, most wins first.
    pub fn player_standings(&self) -> Result<Vec<Standing>, TournamentError> {
        let (players, results) = self.store.snapshot()?;
        Ok(compute_standings(&players, &results))
    }

    /// Pairings for the next round from the current standings.
    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>, TournamentError> {
        let standings = self.player_standings()?;
        Ok(compute_pairings(&standings))
    }
}

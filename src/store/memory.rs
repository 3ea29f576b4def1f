//! In-memory repository behind a single `RwLock`.

use crate::models::{MatchId, MatchResult, Player, PlayerId};
use crate::store::{Repository, StorageError};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug)]
struct Tables {
    players: Vec<Player>,
    results: Vec<MatchResult>,
    /// Serial counters; like database sequences they are never rewound.
    next_player_id: PlayerId,
    next_match_id: MatchId,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            results: Vec::new(),
            next_player_id: 1,
            next_match_id: 1,
        }
    }
}

/// Players and match results held in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StorageError> {
        self.tables.read().map_err(|_| StorageError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StorageError> {
        self.tables.write().map_err(|_| StorageError::LockPoisoned)
    }
}

impl Repository for MemoryStore {
    fn list_players(&self) -> Result<Vec<Player>, StorageError> {
        Ok(self.read()?.players.clone())
    }

    fn list_results(&self) -> Result<Vec<MatchResult>, StorageError> {
        Ok(self.read()?.results.clone())
    }

    fn add_player(&self, name: &str) -> Result<Player, StorageError> {
        let mut t = self.write()?;
        let player = Player::new(t.next_player_id, name);
        t.next_player_id += 1;
        t.players.push(player.clone());
        Ok(player)
    }

    fn add_result(&self, winner: PlayerId, loser: PlayerId) -> Result<MatchId, StorageError> {
        if winner == loser {
            return Err(StorageError::SelfMatch(winner));
        }
        let mut t = self.write()?;
        for id in [winner, loser] {
            if !t.players.iter().any(|p| p.id == id) {
                return Err(StorageError::UnknownPlayer(id));
            }
        }
        let match_id = t.next_match_id;
        t.next_match_id += 1;
        t.results.extend(MatchResult::pair(match_id, winner, loser));
        Ok(match_id)
    }

    fn clear_results(&self) -> Result<(), StorageError> {
        self.write()?.results.clear();
        Ok(())
    }

    fn clear_players(&self) -> Result<(), StorageError> {
        let mut t = self.write()?;
        if !t.results.is_empty() {
            return Err(StorageError::PlayersReferenced {
                results: t.results.len(),
            });
        }
        t.players.clear();
        Ok(())
    }

    fn count_players(&self) -> Result<usize, StorageError> {
        Ok(self.read()?.players.len())
    }

    fn snapshot(&self) -> Result<(Vec<Player>, Vec<MatchResult>), StorageError> {
        let t = self.read()?;
        Ok((t.players.clone(), t.results.clone()))
    }
}

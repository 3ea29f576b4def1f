//! Standing and Pairing: derived views, rebuilt on every query.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// A player's aggregate record at a point in time. `wins <= matches`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches: u32,
}

impl Standing {
    pub fn new(player_id: PlayerId, name: impl Into<String>, wins: u32, matches: u32) -> Self {
        Self {
            player_id,
            name: name.into(),
            wins,
            matches,
        }
    }

    pub fn losses(&self) -> u32 {
        self.matches - self.wins
    }
}

/// Two players assigned to meet in the next round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub player1_id: PlayerId,
    pub player1_name: String,
    pub player2_id: PlayerId,
    pub player2_name: String,
}

impl Pairing {
    /// Pair two standings; `a` is listed first.
    pub fn between(a: &Standing, b: &Standing) -> Self {
        Self {
            player1_id: a.player_id,
            player1_name: a.name.clone(),
            player2_id: b.player_id,
            player2_name: b.name.clone(),
        }
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.player1_id == id || self.player2_id == id
    }
}

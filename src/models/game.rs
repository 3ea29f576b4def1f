//! Recorded match outcomes: one `MatchResult` per player per match.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Identifier shared by the two result records of one match.
pub type MatchId = u32;

/// What a single player got out of a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Loss,
}

/// One player's side of a reported match.
///
/// Every match produces exactly two of these: a `Win` for the winner and a
/// `Loss` for the loser, both carrying the same `match_id`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_id: MatchId,
    pub player_id: PlayerId,
    pub outcome: Outcome,
}

impl MatchResult {
    /// The winner's and loser's records for one match, in that order.
    pub fn pair(match_id: MatchId, winner: PlayerId, loser: PlayerId) -> [Self; 2] {
        [
            Self {
                match_id,
                player_id: winner,
                outcome: Outcome::Win,
            },
            Self {
                match_id,
                player_id: loser,
                outcome: Outcome::Loss,
            },
        ]
    }

    pub fn is_win(&self) -> bool {
        self.outcome == Outcome::Win
    }
}

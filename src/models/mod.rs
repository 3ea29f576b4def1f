//! Data structures for the Swiss tournament: players, match results, standings, pairings.

mod game;
mod player;
mod standing;
mod tournament;

pub use game::{MatchId, MatchResult, Outcome};
pub use player::{Player, PlayerId};
pub use standing::{Pairing, Standing};
pub use tournament::{Tournament, TournamentError};

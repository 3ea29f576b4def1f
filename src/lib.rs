//! Swiss-system tournament: library with models, standings/pairing logic and storage.

pub mod config;
pub mod logic;
pub mod models;
pub mod report;
pub mod store;

pub use config::ServerConfig;
pub use logic::{compute_pairings, compute_standings};
pub use models::{
    MatchId, MatchResult, Outcome, Pairing, Player, PlayerId, Standing, Tournament,
    TournamentError,
};
pub use store::{MemoryStore, Repository, StorageError};

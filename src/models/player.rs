//! Player data structure.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player, assigned by the store on registration.
pub type PlayerId = u32;

/// A registered player. Names need not be unique; the id is.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

//! Tournament logic: standings aggregation and Swiss pairing. Both are pure functions.

mod pairing;
mod standings;

pub use pairing::compute_pairings;
pub use standings::compute_standings;

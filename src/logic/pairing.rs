//! Swiss pairing: match players of adjacent rank for the next round.

use crate::models::{Pairing, Standing};
use std::cmp::Ordering;

/// Rank order used for pairing: more wins first, then name ascending.
fn rank_order(a: &Standing, b: &Standing) -> Ordering {
    b.wins.cmp(&a.wins).then_with(|| a.name.cmp(&b.name))
}

/// Pair players for the next round.
///
/// 1. Sort by wins (descending), then name (ascending). The sort is stable, so
///    entries equal on both keys stay in input order.
/// 2. Pair consecutive entries: (0, 1), (2, 3), ...
///
/// With an odd count the last player in rank order is left out. No bye is
/// produced for them.
pub fn compute_pairings(standings: &[Standing]) -> Vec<Pairing> {
    let mut ranked: Vec<&Standing> = standings.iter().collect();
    ranked.sort_by(|a, b| rank_order(a, b));

    let chunks = ranked.chunks_exact(2);
    if let [unpaired] = chunks.remainder() {
        log::debug!(
            "Odd number of players ({}); {} (id {}) is not paired this round",
            standings.len(),
            unpaired.name,
            unpaired.player_id
        );
    }

    chunks.map(|pair| Pairing::between(pair[0], pair[1])).collect()
}

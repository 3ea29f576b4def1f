//! Standings: aggregate match results into per-player win/match totals.

use crate::models::{MatchResult, Player, PlayerId, Standing};
use std::collections::HashMap;

/// Compute standings for `players` from `results`.
///
/// 1. Every player gets an entry, even with no recorded matches (0 wins, 0 matches).
/// 2. `wins` counts the player's `Win` records; `matches` counts all of its records.
/// 3. Sort by wins, descending. Ties keep the order `players` was given in.
///
/// Results for ids not in `players` are ignored.
pub fn compute_standings(players: &[Player], results: &[MatchResult]) -> Vec<Standing> {
    let mut tally: HashMap<PlayerId, (u32, u32)> = HashMap::with_capacity(players.len());
    for r in results {
        let (wins, matches) = tally.entry(r.player_id).or_default();
        if r.is_win() {
            *wins += 1;
        }
        *matches += 1;
    }

    let mut standings: Vec<Standing> = players
        .iter()
        .map(|p| {
            let (wins, matches) = tally.get(&p.id).copied().unwrap_or_default();
            Standing::new(p.id, p.name.as_str(), wins, matches)
        })
        .collect();

    standings.sort_by(|a, b| b.wins.cmp(&a.wins));
    standings
}

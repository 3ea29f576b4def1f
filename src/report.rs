//! CSV export of standings and pairings.

use crate::models::{Pairing, Standing};

/// Render standings as CSV with a `id,name,wins,matches` header.
pub fn standings_csv(standings: &[Standing]) -> Result<String, csv::Error> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["id", "name", "wins", "matches"])?;
    for s in standings {
        wtr.write_record([
            s.player_id.to_string(),
            s.name.clone(),
            s.wins.to_string(),
            s.matches.to_string(),
        ])?;
    }
    into_string(wtr)
}

/// Render pairings as CSV, one row per pair.
pub fn pairings_csv(pairings: &[Pairing]) -> Result<String, csv::Error> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["player1_id", "player1_name", "player2_id", "player2_name"])?;
    for p in pairings {
        wtr.write_record([
            p.player1_id.to_string(),
            p.player1_name.clone(),
            p.player2_id.to_string(),
            p.player2_name.clone(),
        ])?;
    }
    into_string(wtr)
}

fn into_string(wtr: csv::Writer<Vec<u8>>) -> Result<String, csv::Error> {
    let bytes = wtr.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    // All fields are written from `String`s.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

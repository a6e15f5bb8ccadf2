use serde::Serialize;

use crate::database::PlayerId;
use crate::errors::{TournamentError, TournamentResult};
use crate::standings::StandingsRow;

/// Two players assigned to meet in the next round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl Pairing {
    pub fn as_tuple(&self) -> (PlayerId, &str, PlayerId, &str) {
        (self.id1, &self.name1, self.id2, &self.name2)
    }
}

/// Pairs ranked players two at a time: first with second, third with fourth.
///
/// Each player lands in exactly one pairing. There are no byes, no rematch
/// avoidance and no colour balancing, so an odd field is rejected.
pub fn swiss_pairings(standings: &[StandingsRow]) -> TournamentResult<Vec<Pairing>> {
    if standings.len() % 2 != 0 {
        return Err(TournamentError::OddPlayerCount(standings.len()));
    }

    let pairings = standings
        .chunks_exact(2)
        .map(|pair| Pairing {
            id1: pair[0].player_id,
            name1: pair[0].name.clone(),
            id2: pair[1].player_id,
            name2: pair[1].name.clone(),
        })
        .collect();

    Ok(pairings)
}

pub mod scoring;

pub use scoring::ScoringRule;

use log::debug;
use serde::Serialize;

use crate::database::{self, DbConn, PlayerId, StatisticsRow, TournamentId};
use crate::errors::TournamentResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    pub player_id: PlayerId,
    pub name: String,
    /// Decisive wins
    pub wins: i64,
    pub draws: i64,
    pub matches: i64,
    /// Ranking score under the active scoring rule
    pub points: f64,
}

/// Reads the tournament's statistics in one statement and ranks them.
pub fn player_standings(
    conn: &mut DbConn,
    tournament_id: TournamentId,
    rule: ScoringRule,
) -> TournamentResult<Vec<StandingsRow>> {
    let rows = database::statistics::list_by_tournament(conn, tournament_id)?;
    debug!("Loaded statistics for {} players in tournament {}", rows.len(), tournament_id);
    Ok(rank(rows, rule))
}

/// Orders by score descending, then player id ascending. Every input row is
/// kept, including players with no matches.
pub fn rank(rows: Vec<StatisticsRow>, rule: ScoringRule) -> Vec<StandingsRow> {
    let mut keyed: Vec<(i64, StatisticsRow)> = rows
        .into_iter()
        .map(|row| (rule.half_points(row.wins, row.draws), row))
        .collect();

    keyed.sort_by(|(a_score, a), (b_score, b)| {
        b_score.cmp(a_score).then(a.player_id.cmp(&b.player_id))
    });

    keyed
        .into_iter()
        .map(|(half_points, row)| StandingsRow {
            player_id: row.player_id,
            name: row.name,
            wins: row.wins,
            draws: row.draws,
            matches: row.matches,
            points: half_points as f64 / 2.0,
        })
        .collect()
}

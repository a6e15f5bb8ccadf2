use rusqlite::params;

use super::connection::DbConn;
use super::models::{StatisticsRow, TournamentId};
use crate::errors::TournamentResult;

/// One statement against the view, so the rows come from a single snapshot
/// of the ledger.
pub fn list_by_tournament(
    conn: &mut DbConn,
    tournament_id: TournamentId,
) -> TournamentResult<Vec<StatisticsRow>> {
    let sql = "SELECT id, name, wins, draws, matches FROM statistics WHERE tournament_id = ?1 ORDER BY wins DESC, id ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_statistics_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_statistics_row(row: &rusqlite::Row) -> rusqlite::Result<StatisticsRow> {
    Ok(StatisticsRow {
        player_id: row.get(0)?,
        name: row.get(1)?,
        wins: row.get(2)?,
        draws: row.get(3)?,
        matches: row.get(4)?,
    })
}

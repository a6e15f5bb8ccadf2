use rusqlite::params;

use super::connection::DbConn;
use super::models::{Match, PlayerId, TournamentId};
use crate::errors::TournamentResult;

/// Appends one ledger row. Takes a plain connection so it can run inside the
/// caller's transaction.
pub fn insert_match(
    conn: &rusqlite::Connection,
    tournament_id: TournamentId,
    winner: PlayerId,
    loser: PlayerId,
    draw: bool,
) -> TournamentResult<Match> {
    let sql = "INSERT INTO matches (tournament_id, winner, loser, draw) VALUES (?1, ?2, ?3, ?4) RETURNING id, tournament_id, winner, loser, draw, created_at";

    let recorded = conn.query_row(
        sql,
        params![tournament_id, winner, loser, draw],
        parse_match_row,
    )?;
    Ok(recorded)
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        tournament_id: row.get(1)?,
        winner: row.get(2)?,
        loser: row.get(3)?,
        draw: row.get(4)?,
        created_at: row.get(5)?,
    })
}

pub fn list_by_tournament(
    conn: &mut DbConn,
    tournament_id: TournamentId,
) -> TournamentResult<Vec<Match>> {
    let sql = "SELECT id, tournament_id, winner, loser, draw, created_at FROM matches WHERE tournament_id = ?1 ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn delete_by_tournament(conn: &mut DbConn, tournament_id: TournamentId) -> TournamentResult<usize> {
    let removed = conn.execute(
        "DELETE FROM matches WHERE tournament_id = ?1",
        params![tournament_id],
    )?;
    Ok(removed)
}

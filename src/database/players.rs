use rusqlite::params;

use super::connection::DbConn;
use super::models::{Player, PlayerId, TournamentId};
use crate::errors::TournamentResult;

pub fn insert_player(
    conn: &mut DbConn,
    tournament_id: TournamentId,
    name: &str,
) -> TournamentResult<Player> {
    let sql = "INSERT INTO players (tournament_id, name) VALUES (?1, ?2) RETURNING id, tournament_id, name, created_at";

    let player = conn.query_row(sql, params![tournament_id, name], parse_player_row)?;
    Ok(player)
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        tournament_id: row.get(1)?,
        name: row.get(2)?,
        created_at: row.get(3)?,
    })
}

/// Whether `id` is registered in `tournament_id`.
pub fn is_registered(
    conn: &rusqlite::Connection,
    tournament_id: TournamentId,
    id: PlayerId,
) -> TournamentResult<bool> {
    let sql = "SELECT EXISTS (SELECT 1 FROM players WHERE id = ?1 AND tournament_id = ?2)";
    let found = conn.query_row(sql, params![id, tournament_id], |row| row.get(0))?;
    Ok(found)
}

pub fn count_by_tournament(conn: &mut DbConn, tournament_id: TournamentId) -> TournamentResult<i64> {
    let sql = "SELECT COUNT(id) FROM players WHERE tournament_id = ?1";
    let count = conn.query_row(sql, params![tournament_id], |row| row.get(0))?;
    Ok(count)
}

pub fn list_by_tournament(
    conn: &mut DbConn,
    tournament_id: TournamentId,
) -> TournamentResult<Vec<Player>> {
    let sql = "SELECT id, tournament_id, name, created_at FROM players WHERE tournament_id = ?1 ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Matches referencing the removed players go with them.
pub fn delete_by_tournament(conn: &mut DbConn, tournament_id: TournamentId) -> TournamentResult<usize> {
    let removed = conn.execute(
        "DELETE FROM players WHERE tournament_id = ?1",
        params![tournament_id],
    )?;
    Ok(removed)
}

use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::{Tournament, TournamentId};
use super::setup::seed_default_tournament;
use crate::errors::TournamentResult;

pub fn insert_tournament(conn: &mut DbConn, name: &str) -> TournamentResult<Tournament> {
    let sql = "INSERT INTO tournaments (name) VALUES (?1) RETURNING id, name, created_at";

    let tournament = conn.query_row(sql, params![name], parse_tournament_row)?;
    Ok(tournament)
}

fn parse_tournament_row(row: &rusqlite::Row) -> rusqlite::Result<Tournament> {
    Ok(Tournament {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
    })
}

pub fn find_by_id(conn: &mut DbConn, id: TournamentId) -> TournamentResult<Option<Tournament>> {
    let sql = "SELECT id, name, created_at FROM tournaments WHERE id = ?1";

    let tournament = conn
        .query_row(sql, params![id], parse_tournament_row)
        .optional()?;
    Ok(tournament)
}

pub fn exists(conn: &rusqlite::Connection, id: TournamentId) -> TournamentResult<bool> {
    let sql = "SELECT EXISTS (SELECT 1 FROM tournaments WHERE id = ?1)";
    let found = conn.query_row(sql, params![id], |row| row.get(0))?;
    Ok(found)
}

pub fn list_all(conn: &mut DbConn) -> TournamentResult<Vec<Tournament>> {
    let sql = "SELECT id, name, created_at FROM tournaments ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_tournament_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Removes every tournament and, by cascade, every player and match. The
/// default tournament is seeded again in the same transaction.
pub fn delete_all(conn: &mut DbConn, default_name: &str) -> TournamentResult<usize> {
    let tx = conn.transaction()?;
    let removed = tx.execute("DELETE FROM tournaments", [])?;
    seed_default_tournament(&tx, default_name)?;
    tx.commit()?;

    Ok(removed)
}

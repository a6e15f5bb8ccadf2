use log::info;
use rusqlite::params;

use super::connection::DbConn;
use super::models::DEFAULT_TOURNAMENT_ID;
use crate::errors::TournamentResult;

const DROP_SQL: &str = "
    DROP VIEW IF EXISTS statistics;
    DROP TABLE IF EXISTS matches;
    DROP TABLE IF EXISTS players;
    DROP TABLE IF EXISTS tournaments;
";

/// Creates any missing relations and seeds the default tournament.
pub fn init_schema(conn: &mut DbConn, default_name: &str) -> TournamentResult<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(include_str!("schema.sql"))?;
    seed_default_tournament(&tx, default_name)?;
    tx.commit()?;

    info!("Database schema ready");
    Ok(())
}

pub fn reset_database(conn: &mut DbConn, default_name: &str) -> TournamentResult<()> {
    conn.execute_batch(DROP_SQL)?;
    init_schema(conn, default_name)?;

    info!("Database schema reset successfully");
    Ok(())
}

pub(crate) fn seed_default_tournament(
    conn: &rusqlite::Connection,
    default_name: &str,
) -> TournamentResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO tournaments (id, name) VALUES (?1, ?2)",
        params![DEFAULT_TOURNAMENT_ID, default_name],
    )?;
    Ok(())
}

use std::time::Duration;

use r2d2_sqlite::SqliteConnectionManager;

use crate::errors::TournamentResult;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

const DEFAULT_POOL_SIZE: u32 = 8;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub fn create_pool(database_path: &str) -> TournamentResult<DbPool> {
    create_pool_with_size(database_path, DEFAULT_POOL_SIZE)
}

pub fn create_pool_with_size(database_path: &str, size: u32) -> TournamentResult<DbPool> {
    let manager = build_manager(SqliteConnectionManager::file(database_path));
    build_pool(manager, size.max(1))
}

/// Every checkout sees the same in-memory database, so the pool holds a
/// single connection that is never recycled.
pub fn create_memory_pool() -> TournamentResult<DbPool> {
    let manager = build_manager(SqliteConnectionManager::memory());
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .build(manager)?;
    Ok(pool)
}

fn build_manager(manager: SqliteConnectionManager) -> SqliteConnectionManager {
    manager.with_init(|conn| {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")
    })
}

fn build_pool(manager: SqliteConnectionManager, size: u32) -> TournamentResult<DbPool> {
    let pool = r2d2::Pool::builder().max_size(size).build(manager)?;
    Ok(pool)
}

pub fn get_connection(pool: &DbPool) -> TournamentResult<DbConn> {
    let conn = pool.get()?;
    Ok(conn)
}

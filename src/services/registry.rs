use log::info;

use super::tournament::SwissTournament;
use crate::config::TournamentSettings;
use crate::database::{self, DbPool, Tournament, TournamentId};
use crate::errors::TournamentResult;
use crate::sanitize;

/// Owns the pool and hands out tournament-scoped services.
#[derive(Clone)]
pub struct TournamentRegistry {
    pool: DbPool,
    settings: TournamentSettings,
}

impl TournamentRegistry {
    /// Creates missing tables and the default tournament.
    pub fn new(pool: DbPool, settings: TournamentSettings) -> TournamentResult<Self> {
        let mut conn = database::get_connection(&pool)?;
        database::setup::init_schema(&mut conn, &settings.default_name)?;
        drop(conn);

        Ok(Self { pool, settings })
    }

    pub fn reset(&self) -> TournamentResult<()> {
        let mut conn = database::get_connection(&self.pool)?;
        database::setup::reset_database(&mut conn, &self.settings.default_name)
    }

    pub fn create_tournament(&self, name: &str) -> TournamentResult<Tournament> {
        let clean_name = sanitize::clean_name(name)?;
        let mut conn = database::get_connection(&self.pool)?;
        let tournament = database::tournaments::insert_tournament(&mut conn, &clean_name)?;

        info!("Created tournament {} ({})", tournament.id, tournament.name);
        Ok(tournament)
    }

    pub fn list_tournaments(&self) -> TournamentResult<Vec<Tournament>> {
        let mut conn = database::get_connection(&self.pool)?;
        database::tournaments::list_all(&mut conn)
    }

    pub fn find_tournament(&self, id: TournamentId) -> TournamentResult<Option<Tournament>> {
        let mut conn = database::get_connection(&self.pool)?;
        database::tournaments::find_by_id(&mut conn, id)
    }

    /// Cascades through every tournament's players and matches. The default
    /// tournament comes back empty.
    pub fn delete_tournaments(&self) -> TournamentResult<usize> {
        let mut conn = database::get_connection(&self.pool)?;
        let removed = database::tournaments::delete_all(&mut conn, &self.settings.default_name)?;

        info!("Deleted {} tournaments", removed);
        Ok(removed)
    }

    pub fn scope(&self, id: TournamentId) -> TournamentResult<SwissTournament> {
        SwissTournament::open(self.pool.clone(), id, self.settings.clone())
    }

    pub fn default_scope(&self) -> TournamentResult<SwissTournament> {
        SwissTournament::open_default(self.pool.clone(), self.settings.clone())
    }
}

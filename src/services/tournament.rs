use log::{debug, info, warn};
use rusqlite::TransactionBehavior;

use crate::config::TournamentSettings;
use crate::database::{self, DbPool, Match, Player, PlayerId, TournamentId, DEFAULT_TOURNAMENT_ID};
use crate::errors::{TournamentError, TournamentResult};
use crate::pairing::{self, Pairing};
use crate::sanitize;
use crate::standings::{self, StandingsRow};

/// The caller-facing operations, scoped to one tournament.
///
/// Each call checks a connection out of the pool, does one unit of work and
/// hands the connection back before returning.
#[derive(Clone)]
pub struct SwissTournament {
    pool: DbPool,
    tournament_id: TournamentId,
    settings: TournamentSettings,
}

impl SwissTournament {
    /// Fails with `UnknownTournament` when `tournament_id` is not stored.
    pub fn open(
        pool: DbPool,
        tournament_id: TournamentId,
        settings: TournamentSettings,
    ) -> TournamentResult<Self> {
        let conn = database::get_connection(&pool)?;
        if !database::tournaments::exists(&conn, tournament_id)? {
            return Err(TournamentError::UnknownTournament(tournament_id));
        }
        drop(conn);

        Ok(Self {
            pool,
            tournament_id,
            settings,
        })
    }

    pub fn open_default(pool: DbPool, settings: TournamentSettings) -> TournamentResult<Self> {
        Self::open(pool, DEFAULT_TOURNAMENT_ID, settings)
    }

    pub fn id(&self) -> TournamentId {
        self.tournament_id
    }

    pub fn count_players(&self) -> TournamentResult<i64> {
        let mut conn = database::get_connection(&self.pool)?;
        database::players::count_by_tournament(&mut conn, self.tournament_id)
    }

    pub fn register_player(&self, name: &str) -> TournamentResult<Player> {
        let clean_name = sanitize::clean_name(name).inspect_err(|e| {
            warn!("Rejected player name {name:?}: {e}");
        })?;

        let mut conn = database::get_connection(&self.pool)?;
        let player = database::players::insert_player(&mut conn, self.tournament_id, &clean_name)
            .map_err(|e| TournamentError::Registration(e.to_string()))?;

        info!(
            "Registered player {} ({}) in tournament {}",
            player.id, player.name, self.tournament_id
        );
        Ok(player)
    }

    pub fn players(&self) -> TournamentResult<Vec<Player>> {
        let mut conn = database::get_connection(&self.pool)?;
        database::players::list_by_tournament(&mut conn, self.tournament_id)
    }

    pub fn delete_players(&self) -> TournamentResult<usize> {
        let mut conn = database::get_connection(&self.pool)?;
        let removed = database::players::delete_by_tournament(&mut conn, self.tournament_id)?;

        info!("Deleted {} players from tournament {}", removed, self.tournament_id);
        Ok(removed)
    }

    /// Records one contest. A draw is a single row flagged `draw`; the order
    /// of the two ids does not matter then.
    pub fn report_match(
        &self,
        winner: PlayerId,
        loser: PlayerId,
        draw: bool,
    ) -> TournamentResult<Match> {
        if winner == loser {
            return Err(invalid_match(winner, loser, "a player cannot play itself"));
        }

        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        for id in [winner, loser] {
            if !database::players::is_registered(&tx, self.tournament_id, id)? {
                let reason = format!(
                    "player {id} is not registered in tournament {}",
                    self.tournament_id
                );
                return Err(invalid_match(winner, loser, &reason));
            }
        }

        let recorded = database::matches::insert_match(&tx, self.tournament_id, winner, loser, draw)?;
        tx.commit()?;

        info!(
            "Recorded match {} in tournament {}: {} vs {}{}",
            recorded.id,
            self.tournament_id,
            winner,
            loser,
            if draw { " (draw)" } else { "" }
        );
        Ok(recorded)
    }

    pub fn matches(&self) -> TournamentResult<Vec<Match>> {
        let mut conn = database::get_connection(&self.pool)?;
        database::matches::list_by_tournament(&mut conn, self.tournament_id)
    }

    pub fn delete_matches(&self) -> TournamentResult<usize> {
        let mut conn = database::get_connection(&self.pool)?;
        let removed = database::matches::delete_by_tournament(&mut conn, self.tournament_id)?;

        info!("Deleted {} matches from tournament {}", removed, self.tournament_id);
        Ok(removed)
    }

    pub fn player_standings(&self) -> TournamentResult<Vec<StandingsRow>> {
        let mut conn = database::get_connection(&self.pool)?;
        standings::player_standings(&mut conn, self.tournament_id, self.settings.scoring)
    }

    pub fn swiss_pairings(&self) -> TournamentResult<Vec<Pairing>> {
        let standings = self.player_standings()?;
        let pairings = pairing::swiss_pairings(&standings)?;

        debug!(
            "Paired {} players into {} pairings for tournament {}",
            standings.len(),
            pairings.len(),
            self.tournament_id
        );
        Ok(pairings)
    }
}

fn invalid_match(winner: PlayerId, loser: PlayerId, reason: &str) -> TournamentError {
    warn!("Rejected match {winner} vs {loser}: {reason}");
    TournamentError::InvalidMatch {
        winner,
        loser,
        reason: reason.to_string(),
    }
}

use rusqlite::ErrorCode;
use thiserror::Error;

use crate::database::{PlayerId, TournamentId};

/// Error kinds surfaced by the tournament operations.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Storage could not be reached (pool exhausted, file unopenable)
    #[error("Storage unreachable: {0}")]
    Connectivity(String),

    /// A foreign key or check constraint rejected the write
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// The player row could not be written
    #[error("Failed to register player: {0}")]
    Registration(String),

    /// Self-match or a player id not registered in the tournament
    #[error("Invalid match {winner} vs {loser}: {reason}")]
    InvalidMatch {
        winner: PlayerId,
        loser: PlayerId,
        reason: String,
    },

    #[error("Tournament {0} does not exist")]
    UnknownTournament(TournamentId),

    /// Adjacent pairing needs an even number of players
    #[error("Cannot pair an odd number of players ({0})")]
    OddPlayerCount(usize),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(#[source] rusqlite::Error),
}

pub type TournamentResult<T> = Result<T, TournamentError>;

impl From<rusqlite::Error> for TournamentError {
    fn from(err: rusqlite::Error) -> Self {
        match sqlite_code(&err) {
            Some(ErrorCode::ConstraintViolation) => {
                TournamentError::ConstraintViolation(err.to_string())
            }
            Some(ErrorCode::CannotOpen)
            | Some(ErrorCode::NotADatabase)
            | Some(ErrorCode::DatabaseBusy)
            | Some(ErrorCode::DatabaseLocked) => TournamentError::Connectivity(err.to_string()),
            _ => TournamentError::Storage(err),
        }
    }
}

impl From<r2d2::Error> for TournamentError {
    fn from(err: r2d2::Error) -> Self {
        TournamentError::Connectivity(err.to_string())
    }
}

fn sqlite_code(err: &rusqlite::Error) -> Option<ErrorCode> {
    match err {
        rusqlite::Error::SqliteFailure(inner, _) => Some(inner.code),
        _ => None,
    }
}

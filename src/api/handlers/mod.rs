use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::api::models::ErrorResponse;
use crate::database::TournamentId;
use crate::errors::{TournamentError, TournamentResult};
use crate::services::{SwissTournament, TournamentRegistry};

pub mod matches;
pub mod players;
pub mod rounds;
pub mod tournaments;

pub struct AppState {
    pub registry: TournamentRegistry,
}

/// Maps a failed operation onto an HTTP status with a JSON body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<TournamentError> for ApiError {
    fn from(err: TournamentError) -> Self {
        let status = match &err {
            TournamentError::InvalidMatch { .. } | TournamentError::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            TournamentError::UnknownTournament(_) => StatusCode::NOT_FOUND,
            TournamentError::OddPlayerCount(_) | TournamentError::ConstraintViolation(_) => {
                StatusCode::CONFLICT
            }
            TournamentError::Connectivity(_) => StatusCode::SERVICE_UNAVAILABLE,
            TournamentError::Registration(_) | TournamentError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            log::error!("Request failed: {err}");
        }

        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { error: self.message })).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// rusqlite blocks, so database work runs off the async workers.
pub async fn run_blocking<T, F>(work: F) -> ApiResult<T>
where
    F: FnOnce() -> TournamentResult<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(work).await {
        Ok(result) => result.map_err(ApiError::from),
        Err(e) => {
            log::error!("Blocking task failed: {e}");
            Err(ApiError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "internal error".to_string(),
            })
        }
    }
}

/// Opens the tournament scope and runs `work` against it on the blocking pool.
pub async fn with_scope<T, F>(registry: &TournamentRegistry, id: TournamentId, work: F) -> ApiResult<T>
where
    F: FnOnce(&SwissTournament) -> TournamentResult<T> + Send + 'static,
    T: Send + 'static,
{
    let registry = registry.clone();
    run_blocking(move || {
        let scope = registry.scope(id)?;
        work(&scope)
    })
    .await
}

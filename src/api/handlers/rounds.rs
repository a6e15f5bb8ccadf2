use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;

use super::{with_scope, ApiResult, AppState};
use crate::database::TournamentId;
use crate::pairing::Pairing;
use crate::standings::StandingsRow;

pub async fn get_standings(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TournamentId>,
) -> ApiResult<Json<Vec<StandingsRow>>> {
    let standings = with_scope(&state.registry, id, |scope| scope.player_standings()).await?;
    Ok(Json(standings))
}

pub async fn get_pairings(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TournamentId>,
) -> ApiResult<Json<Vec<Pairing>>> {
    let pairings = with_scope(&state.registry, id, |scope| scope.swiss_pairings()).await?;
    Ok(Json(pairings))
}

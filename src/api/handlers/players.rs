use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use super::{with_scope, ApiResult, AppState};
use crate::api::models::{CountResponse, DeletedResponse, NameRequest};
use crate::database::{Player, TournamentId};

pub async fn list_players(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TournamentId>,
) -> ApiResult<Json<Vec<Player>>> {
    let players = with_scope(&state.registry, id, |scope| scope.players()).await?;
    Ok(Json(players))
}

pub async fn register_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TournamentId>,
    Json(body): Json<NameRequest>,
) -> ApiResult<(StatusCode, Json<Player>)> {
    let player = with_scope(&state.registry, id, move |scope| scope.register_player(&body.name)).await?;
    Ok((StatusCode::CREATED, Json(player)))
}

pub async fn count_players(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TournamentId>,
) -> ApiResult<Json<CountResponse>> {
    let count = with_scope(&state.registry, id, |scope| scope.count_players()).await?;
    Ok(Json(CountResponse { count }))
}

pub async fn delete_players(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TournamentId>,
) -> ApiResult<Json<DeletedResponse>> {
    let removed = with_scope(&state.registry, id, |scope| scope.delete_players()).await?;
    Ok(Json(DeletedResponse { removed }))
}

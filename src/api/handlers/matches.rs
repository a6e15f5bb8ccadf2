use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use super::{with_scope, ApiResult, AppState};
use crate::api::models::{DeletedResponse, ReportMatchRequest};
use crate::database::{Match, TournamentId};

pub async fn list_matches(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TournamentId>,
) -> ApiResult<Json<Vec<Match>>> {
    let matches = with_scope(&state.registry, id, |scope| scope.matches()).await?;
    Ok(Json(matches))
}

pub async fn report_match(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TournamentId>,
    Json(body): Json<ReportMatchRequest>,
) -> ApiResult<(StatusCode, Json<Match>)> {
    let recorded = with_scope(&state.registry, id, move |scope| {
        scope.report_match(body.winner, body.loser, body.draw)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(recorded)))
}

pub async fn delete_matches(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TournamentId>,
) -> ApiResult<Json<DeletedResponse>> {
    let removed = with_scope(&state.registry, id, |scope| scope.delete_matches()).await?;
    Ok(Json(DeletedResponse { removed }))
}

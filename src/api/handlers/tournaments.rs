use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use super::{run_blocking, ApiResult, AppState};
use crate::api::models::{DeletedResponse, NameRequest};
use crate::database::Tournament;

pub async fn list_tournaments(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Tournament>>> {
    let registry = state.registry.clone();
    let tournaments = run_blocking(move || registry.list_tournaments()).await?;
    Ok(Json(tournaments))
}

pub async fn create_tournament(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NameRequest>,
) -> ApiResult<(StatusCode, Json<Tournament>)> {
    let registry = state.registry.clone();
    let tournament = run_blocking(move || registry.create_tournament(&body.name)).await?;
    Ok((StatusCode::CREATED, Json(tournament)))
}

pub async fn delete_tournaments(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DeletedResponse>> {
    let registry = state.registry.clone();
    let removed = run_blocking(move || registry.delete_tournaments()).await?;
    Ok(Json(DeletedResponse { removed }))
}

use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{matches, players, rounds, tournaments, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/tournaments",
            get(tournaments::list_tournaments)
                .post(tournaments::create_tournament)
                .delete(tournaments::delete_tournaments),
        )
        .route(
            "/api/tournaments/:id/players",
            get(players::list_players)
                .post(players::register_player)
                .delete(players::delete_players),
        )
        .route("/api/tournaments/:id/players/count", get(players::count_players))
        .route(
            "/api/tournaments/:id/matches",
            get(matches::list_matches)
                .post(matches::report_match)
                .delete(matches::delete_matches),
        )
        .route("/api/tournaments/:id/standings", get(rounds::get_standings))
        .route("/api/tournaments/:id/pairings", get(rounds::get_pairings))
        .with_state(state)
}

use chrono::NaiveDateTime;
use serde::Serialize;

pub type TournamentId = i64;
pub type PlayerId = i64;
pub type MatchId = i64;

/// Seeded by schema setup; the unscoped operations act on it.
pub const DEFAULT_TOURNAMENT_ID: TournamentId = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub tournament_id: TournamentId,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub draw: bool,
    pub created_at: Option<NaiveDateTime>,
}

// Row of the statistics view, before scoring and ordering
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsRow {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: i64,
    pub draws: i64,
    pub matches: i64,
}

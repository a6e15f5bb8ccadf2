use serde::{Deserialize, Serialize};

/// How drawn contests count towards the ranking score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    /// A draw credits a full win to both sides
    #[default]
    LegacyDoubleWin,
    /// Win = 1, draw = 0.5
    HalfPoint,
}

impl ScoringRule {
    /// Score in half-point units, so ordering stays in integers.
    pub fn half_points(self, wins: i64, draws: i64) -> i64 {
        match self {
            ScoringRule::LegacyDoubleWin => 2 * (wins + draws),
            ScoringRule::HalfPoint => 2 * wins + draws,
        }
    }
}

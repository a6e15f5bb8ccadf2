use std::path::Path;

use serde::Deserialize;

use crate::errors::{TournamentError, TournamentResult};
use crate::standings::ScoringRule;

pub const DATABASE_PATH_ENV: &str = "DATABASE_PATH";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "swiss_tournament.db".to_string(),
            pool_size: 8,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TournamentSettings {
    pub scoring: ScoringRule,
    /// Name given to the implicit tournament when it is seeded
    pub default_name: String,
}

impl Default for TournamentSettings {
    fn default() -> Self {
        Self {
            scoring: ScoringRule::default(),
            default_name: "default".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warning".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub tournament: TournamentSettings,
    pub logging: LoggingSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `path` when given, otherwise starts from defaults.
    /// `DATABASE_PATH` overrides the database file either way.
    pub fn load(path: Option<&Path>) -> TournamentResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::new(),
        };

        if let Ok(db_path) = std::env::var(DATABASE_PATH_ENV) {
            config.database.path = db_path;
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> TournamentResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            TournamentError::InvalidInput(format!("cannot read config {}: {e}", path.display()))
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> TournamentResult<Self> {
        toml::from_str(text)
            .map_err(|e| TournamentError::InvalidInput(format!("malformed config: {e}")))
    }
}

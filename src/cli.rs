use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::database::{PlayerId, TournamentId, DEFAULT_TOURNAMENT_ID};
use crate::standings::ScoringRule;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Swiss-system tournament pairings",
    long_about = "Swiss-system tournament pairings.\n\nPlayers are paired by adjacency in the standings. There are no byes, \
                  no rematch avoidance and no colour balancing; an odd field cannot be paired."
)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Tournament to act on
    #[arg(short, long, global = true, default_value_t = DEFAULT_TOURNAMENT_ID)]
    pub tournament: TournamentId,

    /// Override the configured scoring rule for draws
    #[arg(long, global = true, value_enum)]
    pub scoring: Option<ScoringRule>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Create the database schema if missing
    Init,
    /// Drop and recreate the database schema
    Reset,
    /// Create a new tournament
    TournamentCreate { name: String },
    /// List tournaments
    Tournaments,
    /// Delete every tournament with its players and matches
    DeleteTournaments,
    /// Register a player
    Register { name: String },
    /// Count registered players
    Count,
    /// List registered players
    Players,
    /// Delete all players and their matches
    DeletePlayers,
    /// Record a match result
    Report {
        winner: PlayerId,
        loser: PlayerId,
        /// Record the contest as a draw
        #[arg(long)]
        draw: bool,
    },
    /// List recorded matches
    Matches,
    /// Delete all matches, keeping players
    DeleteMatches,
    /// Show standings ordered by score
    Standings,
    /// Show pairings for the next round
    Pairings,
    /// Start the HTTP server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print shell completions
    Completions { shell: Shell },
}

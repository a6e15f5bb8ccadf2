pub mod registry;
pub mod server;
pub mod tournament;

pub use registry::TournamentRegistry;
pub use tournament::SwissTournament;

use log::LevelFilter;

use crate::errors::{TournamentError, TournamentResult};

/// Parses a configured level name. Accepts the usual names in any case,
/// including `warning` as a spelling of `warn`.
pub fn parse_level(level: &str) -> TournamentResult<LevelFilter> {
    match level.trim().to_ascii_uppercase().as_str() {
        "OFF" => Ok(LevelFilter::Off),
        "ERROR" => Ok(LevelFilter::Error),
        "WARN" | "WARNING" => Ok(LevelFilter::Warn),
        "INFO" => Ok(LevelFilter::Info),
        "DEBUG" => Ok(LevelFilter::Debug),
        "TRACE" => Ok(LevelFilter::Trace),
        _ => Err(TournamentError::InvalidInput(format!(
            "Invalid log level: {level}"
        ))),
    }
}

pub fn init(level: &str) -> TournamentResult<()> {
    let filter = parse_level(level)?;
    sensible_env_logger::init!();
    // RUST_LOG still narrows output below this ceiling
    log::set_max_level(filter);
    Ok(())
}

pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod logging;
pub mod output;
pub mod pairing;
pub mod sanitize;
pub mod services;
pub mod standings;

use std::io;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use cli::Cli;
use log::info;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::database::TournamentId;
use crate::services::server::ServerService;
use crate::services::{SwissTournament, TournamentRegistry};

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(scoring) = cli.scoring {
        config.tournament.scoring = scoring;
    }
    Ok(config)
}

pub fn open_registry(config: &AppConfig) -> Result<TournamentRegistry> {
    let pool = database::create_pool_with_size(&config.database.path, config.database.pool_size)
        .with_context(|| format!("Failed to open database {}", config.database.path))?;
    let registry = TournamentRegistry::new(pool, config.tournament.clone())?;
    Ok(registry)
}

pub fn handle_serve(port: u16, registry: TournamentRegistry) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, registry);
        service.run().await
    })
}

pub fn handle_completions(shell: clap_complete::Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
}

pub fn execute(cli: &Cli, config: &AppConfig) -> Result<()> {
    if let Command::Completions { shell } = &cli.command {
        handle_completions(*shell);
        return Ok(());
    }

    let registry = open_registry(config)?;
    match &cli.command {
        Command::Init => {
            info!("Schema initialised at {}", config.database.path);
            Ok(())
        }
        Command::Reset => Ok(registry.reset()?),
        Command::TournamentCreate { name } => {
            let tournament = registry.create_tournament(name)?;
            output::print_tournaments(&[tournament]);
            Ok(())
        }
        Command::Tournaments => {
            output::print_tournaments(&registry.list_tournaments()?);
            Ok(())
        }
        Command::DeleteTournaments => {
            let removed = registry.delete_tournaments()?;
            output::print_removed("tournaments", removed);
            Ok(())
        }
        Command::Serve { port } => handle_serve(*port, registry),
        command => execute_scoped(command, &scope(&registry, cli.tournament)?),
    }
}

fn scope(registry: &TournamentRegistry, id: TournamentId) -> Result<SwissTournament> {
    registry
        .scope(id)
        .with_context(|| format!("Cannot open tournament {id}"))
}

fn execute_scoped(command: &Command, tournament: &SwissTournament) -> Result<()> {
    match command {
        Command::Register { name } => {
            let player = tournament.register_player(name)?;
            output::print_players(&[player]);
        }
        Command::Count => println!("{}", tournament.count_players()?),
        Command::Players => output::print_players(&tournament.players()?),
        Command::DeletePlayers => output::print_removed("players", tournament.delete_players()?),
        Command::Report { winner, loser, draw } => {
            let recorded = tournament.report_match(*winner, *loser, *draw)?;
            output::print_matches(&[recorded]);
        }
        Command::Matches => output::print_matches(&tournament.matches()?),
        Command::DeleteMatches => output::print_removed("matches", tournament.delete_matches()?),
        Command::Standings => output::print_standings(&tournament.player_standings()?),
        Command::Pairings => output::print_pairings(&tournament.swiss_pairings()?),
        other => anyhow::bail!("{other:?} is not a tournament command"),
    }
    Ok(())
}

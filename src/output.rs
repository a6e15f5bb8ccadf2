//! Terminal tables for the command-line surface.

use colored::Colorize;

use crate::database::{Match, Player, Tournament};
use crate::pairing::Pairing;
use crate::standings::StandingsRow;

pub fn print_tournaments(tournaments: &[Tournament]) {
    println!("{}", format!("{:>6}  {}", "ID", "NAME").bold());
    for tournament in tournaments {
        println!("{:>6}  {}", tournament.id, tournament.name);
    }
}

pub fn print_players(players: &[Player]) {
    println!("{}", format!("{:>6}  {}", "ID", "NAME").bold());
    for player in players {
        println!("{:>6}  {}", player.id, player.name);
    }
}

pub fn print_matches(matches: &[Match]) {
    println!("{}", format!("{:>6}  {:>8}  {:>8}  {}", "ID", "WINNER", "LOSER", "RESULT").bold());
    for recorded in matches {
        let result = if recorded.draw { "draw".yellow() } else { "win".green() };
        println!(
            "{:>6}  {:>8}  {:>8}  {}",
            recorded.id, recorded.winner, recorded.loser, result
        );
    }
}

pub fn print_standings(standings: &[StandingsRow]) {
    println!(
        "{}",
        format!(
            "{:>4}  {:>6}  {:<24}  {:>6}  {:>5}  {:>5}  {:>7}",
            "#", "ID", "NAME", "POINTS", "WINS", "DRAWS", "MATCHES"
        )
        .bold()
    );
    for (rank, row) in standings.iter().enumerate() {
        let line = format!(
            "{:>4}  {:>6}  {:<24}  {:>6.1}  {:>5}  {:>5}  {:>7}",
            rank + 1,
            row.player_id,
            row.name,
            row.points,
            row.wins,
            row.draws,
            row.matches
        );
        if rank == 0 && row.matches > 0 {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }
}

pub fn print_pairings(pairings: &[Pairing]) {
    if pairings.is_empty() {
        println!("{}", "No players to pair".dimmed());
        return;
    }
    for (table, pairing) in pairings.iter().enumerate() {
        println!(
            "{} {:>6} {:<24} {} {:>6} {}",
            format!("Table {:>3}:", table + 1).bold(),
            pairing.id1,
            pairing.name1,
            "vs".cyan(),
            pairing.id2,
            pairing.name2
        );
    }
}

pub fn print_removed(what: &str, removed: usize) {
    println!("{} {removed} {what}", "Removed".red());
}

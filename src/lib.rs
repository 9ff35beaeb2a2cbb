pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod output;
pub mod pairing;
pub mod registration;
pub mod services;
pub mod storage;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use log::info;

use crate::cli::Cli;
use crate::config::settings::AppConfig;
use crate::domain::{Player, PlayerId};
use crate::pairing::PairingStrategy;
use crate::services::{SimulationService, TournamentService};
use crate::storage::{RosterStore, SqliteStore};

pub fn interpret() -> Cli {
    Cli::parse()
}

fn open_store(config: &AppConfig) -> Result<SqliteStore> {
    info!("Using database {}", config.storage.database_path);
    SqliteStore::open(&config.storage.database_path)
}

pub fn handle_register(config: &AppConfig, name: &str) -> Result<()> {
    let mut store = open_store(config)?;
    let player = registration::register_player(&mut store, name)?;
    println!("Registered {} with id {}", player.name, player.id);
    Ok(())
}

pub fn handle_report(config: &AppConfig, winner_id: PlayerId, loser_id: PlayerId) -> Result<()> {
    let store = open_store(config)?;
    let winner = describe_player(&store, winner_id)?;
    let loser = describe_player(&store, loser_id)?;

    let mut service = TournamentService::new(store, &config.pairing);
    service.report_match(winner_id, loser_id)?;
    println!("Recorded: {winner} beat {loser}");
    Ok(())
}

fn describe_player(store: &SqliteStore, id: PlayerId) -> Result<String> {
    let description = match store.find_player(id)? {
        Some(Player { id, name }) => format!("{name} ({id})"),
        None => format!("unknown player ({id})"),
    };
    Ok(description)
}

pub fn handle_standings(config: &AppConfig, json: bool) -> Result<()> {
    let service = TournamentService::new(open_store(config)?, &config.pairing);
    output::print_standings(&service.standings()?, json)
}

pub fn handle_pairings(config: &AppConfig, json: bool, strategy: PairingStrategy) -> Result<()> {
    let mut settings = config.pairing.clone();
    settings.strategy = strategy;

    let service = TournamentService::new(open_store(config)?, &settings);
    output::print_pairings(&service.next_round_pairings()?, json)
}

pub fn handle_simulate(
    config: &AppConfig,
    rounds: Option<usize>,
    seed: Option<u64>,
    strategy: Option<PairingStrategy>,
) -> Result<()> {
    let mut config = config.clone();
    if let Some(rounds) = rounds {
        config.simulation.rounds = rounds;
    }
    if let Some(strategy) = strategy {
        config.simulation.strategy = strategy;
    }
    config.simulation.seed = seed.or(config.simulation.seed);

    let mut service = SimulationService::new(open_store(&config)?, &config);
    let report = service.run()?;
    info!("Played {} rounds, {} matches", report.rounds_played, report.matches.len());

    output::print_standings(&report.standings, false)
}

pub fn handle_reset(config: &AppConfig, players: bool) -> Result<()> {
    let mut store = open_store(config)?;
    if players {
        store.delete_players()?;
        println!("Deleted all players and matches");
    } else {
        store.delete_matches()?;
        println!("Deleted all matches");
    }
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

use anyhow::Result;

use swiss_pairing::cli::{Cli, Command};
use swiss_pairing::config::AppConfig;
use swiss_pairing::{
    handle_completions, handle_pairings, handle_register, handle_report, handle_reset,
    handle_simulate, handle_standings, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    let config = build_config(&cli);
    execute_command(&cli.command, &config)
}

fn build_config(cli: &Cli) -> AppConfig {
    let mut config = AppConfig::new();
    if let Some(path) = &cli.database {
        config.storage.database_path = path.clone();
    }
    config
}

fn execute_command(command: &Command, config: &AppConfig) -> Result<()> {
    match command {
        Command::Register { name } => handle_register(config, name),
        Command::Report { winner, loser } => handle_report(config, *winner, *loser),
        Command::Standings { json } => handle_standings(config, *json),
        Command::Pairings { json, strategy } => handle_pairings(config, *json, *strategy),
        Command::Simulate {
            rounds,
            seed,
            strategy,
        } => handle_simulate(config, *rounds, *seed, *strategy),
        Command::Reset { players } => handle_reset(config, *players),
        Command::Completions { shell } => handle_completions(*shell),
    }
}

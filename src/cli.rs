use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::pairing::PairingStrategy;

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system tournament pairing")]
pub struct Cli {
    /// SQLite database file (overrides DATABASE_PATH)
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Register a new player
    Register {
        /// Player's full name (need not be unique)
        name: String,
    },
    /// Record the outcome of a finished match
    Report {
        /// Id of the player who won
        winner: i32,
        /// Id of the player who lost
        loser: i32,
    },
    /// Show players ranked by wins
    Standings {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show pairings for the next round
    Pairings {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Pairing algorithm
        #[arg(short, long, value_enum, default_value_t = PairingStrategy::Greedy)]
        strategy: PairingStrategy,
    },
    /// Reset the database and play simulated rounds with random winners
    Simulate {
        /// Number of rounds (defaults to 8)
        #[arg(short, long)]
        rounds: Option<usize>,
        /// Seed for reproducible outcomes
        #[arg(long)]
        seed: Option<u64>,
        /// Pairing algorithm (defaults to backtracking)
        #[arg(short, long, value_enum)]
        strategy: Option<PairingStrategy>,
    },
    /// Remove all matches, or all players and matches with --players
    Reset {
        /// Also delete players and restart ids
        #[arg(long)]
        players: bool,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

use crate::pairing::PairingStrategy;

const DEFAULT_DATABASE_PATH: &str = "swiss_pairing.db";

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub database_path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PairingSettings {
    pub strategy: PairingStrategy,
    pub max_backtracks: usize,
}

impl Default for PairingSettings {
    fn default() -> Self {
        Self {
            strategy: PairingStrategy::Greedy,
            max_backtracks: 100_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulationSettings {
    pub rounds: usize,
    pub roster: Vec<String>,
    /// Fixed seed for reproducible outcomes (None = random)
    pub seed: Option<u64>,
    /// Overrides `PairingSettings::strategy` for simulated rounds. Greedy
    /// pairing rarely survives 8 rounds of random results on 16 players.
    pub strategy: PairingStrategy,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            rounds: 8,
            roster: default_roster(),
            seed: None,
            strategy: PairingStrategy::Backtracking,
        }
    }
}

fn default_roster() -> Vec<String> {
    [
        "Jason", "Bincy", "Benita", "Daniel", "Connie", "Dennis", "Emily", "Thomas",
        "Sosamma", "Benjamin", "Susan", "Sam", "William", "Anthony", "Alex", "Sasha",
    ]
    .iter()
    .map(|name| name.to_string())
    .collect()
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub storage: StorageSettings,
    pub pairing: PairingSettings,
    pub simulation: SimulationSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

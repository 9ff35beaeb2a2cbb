use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::tournament::TournamentService;
use crate::config::settings::{AppConfig, PairingSettings, SimulationSettings};
use crate::domain::{MatchRecord, Pairing, StandingEntry};
use crate::errors::TournamentError;
use crate::registration;
use crate::storage::{RosterStore, TournamentStore};

#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub rounds_played: usize,
    pub matches: Vec<MatchRecord>,
    pub standings: Vec<StandingEntry>,
}

/// Plays whole rounds with coin-flip outcomes against a fresh roster
pub struct SimulationService<S> {
    tournament: TournamentService<S>,
    settings: SimulationSettings,
    rng: StdRng,
}

impl<S: TournamentStore + RosterStore> SimulationService<S> {
    pub fn new(store: S, config: &AppConfig) -> Self {
        let rng = match config.simulation.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let pairing = PairingSettings {
            strategy: config.simulation.strategy,
            ..config.pairing.clone()
        };

        Self {
            tournament: TournamentService::new(store, &pairing),
            settings: config.simulation.clone(),
            rng,
        }
    }

    pub fn into_store(self) -> S {
        self.tournament.into_store()
    }

    /// Resets the store, registers the roster and plays the configured rounds.
    ///
    /// Stops at the first round that cannot be paired; matches from earlier
    /// rounds stay recorded.
    pub fn run(&mut self) -> Result<SimulationReport, TournamentError> {
        info!("=== Starting Simulation ===\n");

        self.register_roster()?;
        info!("  → Registered {} players\n", self.settings.roster.len());

        let mut matches = Vec::new();
        for round in 1..=self.settings.rounds {
            info!("Round {}/{}", round, self.settings.rounds);
            let results = self.play_round()?;
            matches.extend(results);

            let standings = self.tournament.standings()?;
            log_standings(&standings);
        }

        info!("=== Simulation Complete ===");
        Ok(SimulationReport {
            rounds_played: self.settings.rounds,
            matches,
            standings: self.tournament.standings()?,
        })
    }

    fn register_roster(&mut self) -> Result<(), TournamentError> {
        let store = self.tournament.store_mut();
        store.delete_players()?;

        for name in &self.settings.roster {
            registration::register_player(store, name)?;
        }
        Ok(())
    }

    fn play_round(&mut self) -> Result<Vec<MatchRecord>, TournamentError> {
        let pairings = self.tournament.next_round_pairings()?;
        let mut results = Vec::with_capacity(pairings.len());

        for pairing in &pairings {
            let result = self.decide(pairing);
            info!(
                "  {} ({}) vs {} ({}) → winner {}",
                pairing.first_name, pairing.first_id, pairing.second_name, pairing.second_id, result.winner_id
            );
            self.tournament.report_match(result.winner_id, result.loser_id)?;
            results.push(result);
        }

        Ok(results)
    }

    fn decide(&mut self, pairing: &Pairing) -> MatchRecord {
        if self.rng.gen_bool(0.5) {
            MatchRecord::new(pairing.first_id, pairing.second_id)
        } else {
            MatchRecord::new(pairing.second_id, pairing.first_id)
        }
    }
}

fn log_standings(standings: &[StandingEntry]) {
    for (rank, entry) in standings.iter().enumerate() {
        info!(
            "    {:>2}. {} ({}): {} wins / {} matches",
            rank + 1,
            entry.name,
            entry.id,
            entry.wins,
            entry.matches_played
        );
    }
}

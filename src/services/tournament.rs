use log::{debug, info};

use crate::config::settings::PairingSettings;
use crate::domain::{MatchRecord, Pairing, Player, PlayerId, StandingEntry};
use crate::errors::{StorageError, TournamentError};
use crate::pairing::{compute_standings, PairingEngine};
use crate::storage::TournamentStore;

/// Players and matches read together, so standings and pairings agree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub players: Vec<Player>,
    pub matches: Vec<MatchRecord>,
}

impl Snapshot {
    pub fn read<S: TournamentStore>(store: &S) -> Result<Self, StorageError> {
        Ok(Self {
            players: store.list_players()?,
            matches: store.list_matches()?,
        })
    }

    pub fn standings(&self) -> Vec<StandingEntry> {
        compute_standings(&self.players, &self.matches)
    }
}

/// Runs rounds against a store.
///
/// Calls must be serialized by the caller: every match of a round has to be
/// reported before the next round is paired. Reporting takes `&mut self`, so
/// within one service instance the borrow checker already enforces this; the
/// same rule applies to anything else writing to the underlying store.
pub struct TournamentService<S> {
    store: S,
    engine: PairingEngine,
}

impl<S: TournamentStore> TournamentService<S> {
    pub fn new(store: S, settings: &PairingSettings) -> Self {
        Self {
            store,
            engine: PairingEngine::new(settings),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn snapshot(&self) -> Result<Snapshot, StorageError> {
        Snapshot::read(&self.store)
    }

    pub fn standings(&self) -> Result<Vec<StandingEntry>, StorageError> {
        Ok(self.snapshot()?.standings())
    }

    pub fn next_round_pairings(&self) -> Result<Vec<Pairing>, TournamentError> {
        let snapshot = self.snapshot()?;
        debug!(
            "Pairing {} players with {} recorded matches",
            snapshot.players.len(),
            snapshot.matches.len()
        );

        let pairings = self.engine.pair(&snapshot.players, &snapshot.matches)?;
        info!("Generated {} pairings ({:?})", pairings.len(), self.engine.strategy());
        Ok(pairings)
    }

    pub fn report_match(&mut self, winner_id: PlayerId, loser_id: PlayerId) -> Result<(), StorageError> {
        self.store.record_match(winner_id, loser_id)
    }
}

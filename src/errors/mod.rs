use thiserror::Error;

use crate::domain::PlayerId;

type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure at the storage boundary. Never retried by the caller.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read {entity} from storage")]
    Read {
        entity: &'static str,
        #[source]
        source: BoxedSource,
    },

    #[error("Failed to record match (winner {winner_id}, loser {loser_id})")]
    RecordMatch {
        winner_id: PlayerId,
        loser_id: PlayerId,
        #[source]
        source: BoxedSource,
    },

    #[error("Failed to {operation}")]
    Write {
        operation: &'static str,
        #[source]
        source: BoxedSource,
    },
}

impl StorageError {
    pub fn read(entity: &'static str, source: impl Into<BoxedSource>) -> Self {
        Self::Read {
            entity,
            source: source.into(),
        }
    }

    pub fn record_match(
        winner_id: PlayerId,
        loser_id: PlayerId,
        source: impl Into<BoxedSource>,
    ) -> Self {
        Self::RecordMatch {
            winner_id,
            loser_id,
            source: source.into(),
        }
    }

    pub fn write(operation: &'static str, source: impl Into<BoxedSource>) -> Self {
        Self::Write {
            operation,
            source: source.into(),
        }
    }
}

/// No complete rematch-free pairing could be produced for the round
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairingError {
    #[error("Cannot pair an odd number of players ({count})")]
    OddRoster { count: usize },

    #[error("Player {player_id} has already played every other registered player")]
    OpponentsExhausted { player_id: PlayerId },

    #[error("Player {player_id} has no unpaired opponent left this round")]
    Deadlock { player_id: PlayerId },

    #[error("No rematch-free pairing exists for the current round")]
    NoPerfectPairing,

    #[error("Pairing search gave up after {limit} backtracks")]
    SearchLimit { limit: usize },
}

/// Anything that aborts a round attempt at the service layer
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Pairing(#[from] PairingError),
}

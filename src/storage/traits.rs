use crate::domain::{MatchRecord, Player, PlayerId};
use crate::errors::StorageError;

/// What pairing and standings need from persistence.
///
/// Each call reads a fresh snapshot; callers must not record matches while
/// a round is being paired from an earlier snapshot.
pub trait TournamentStore {
    fn list_players(&self) -> Result<Vec<Player>, StorageError>;

    fn list_matches(&self) -> Result<Vec<MatchRecord>, StorageError>;

    fn record_match(&mut self, winner_id: PlayerId, loser_id: PlayerId) -> Result<(), StorageError>;
}

/// Registration and full-reset operations, kept apart from the pairing core
pub trait RosterStore {
    fn register_player(&mut self, name: &str) -> Result<Player, StorageError>;

    fn find_player(&self, id: PlayerId) -> Result<Option<Player>, StorageError>;

    fn count_players(&self) -> Result<usize, StorageError>;

    fn delete_matches(&mut self) -> Result<(), StorageError>;

    /// Removes every player and match; ids start over
    fn delete_players(&mut self) -> Result<(), StorageError>;
}

use super::traits::{RosterStore, TournamentStore};
use crate::domain::{MatchRecord, Player, PlayerId};
use crate::errors::StorageError;

/// In-process store for tests and throwaway simulations
#[derive(Debug, Clone)]
pub struct MemoryStore {
    players: Vec<Player>,
    matches: Vec<MatchRecord>,
    next_id: PlayerId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            matches: Vec::new(),
            next_id: 1,
        }
    }

    pub fn with_players<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        for name in names {
            store.push_player(name.as_ref());
        }
        store
    }

    fn push_player(&mut self, name: &str) -> Player {
        let player = Player::new(self.next_id, name);
        self.next_id += 1;
        self.players.push(player.clone());
        player
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TournamentStore for MemoryStore {
    fn list_players(&self) -> Result<Vec<Player>, StorageError> {
        Ok(self.players.clone())
    }

    fn list_matches(&self) -> Result<Vec<MatchRecord>, StorageError> {
        Ok(self.matches.clone())
    }

    fn record_match(&mut self, winner_id: PlayerId, loser_id: PlayerId) -> Result<(), StorageError> {
        self.matches.push(MatchRecord::new(winner_id, loser_id));
        Ok(())
    }
}

impl RosterStore for MemoryStore {
    fn register_player(&mut self, name: &str) -> Result<Player, StorageError> {
        Ok(self.push_player(name))
    }

    fn find_player(&self, id: PlayerId) -> Result<Option<Player>, StorageError> {
        Ok(self.players.iter().find(|p| p.id == id).cloned())
    }

    fn count_players(&self) -> Result<usize, StorageError> {
        Ok(self.players.len())
    }

    fn delete_matches(&mut self) -> Result<(), StorageError> {
        self.matches.clear();
        Ok(())
    }

    fn delete_players(&mut self) -> Result<(), StorageError> {
        self.matches.clear();
        self.players.clear();
        self.next_id = 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_players_numbers_from_one() {
        let store = MemoryStore::with_players(["A", "B", "C"]);
        let ids: Vec<PlayerId> = store.list_players().unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_delete_matches_keeps_roster() {
        let mut store = MemoryStore::with_players(["A", "B"]);
        store.record_match(1, 2).unwrap();

        store.delete_matches().unwrap();

        assert!(store.list_matches().unwrap().is_empty());
        assert_eq!(store.count_players().unwrap(), 2);
    }
}

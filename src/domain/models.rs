use serde::{Deserialize, Serialize};

pub type PlayerId = i32;

/// Registered tournament participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Outcome of a single completed match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
}

impl MatchRecord {
    pub fn new(winner_id: PlayerId, loser_id: PlayerId) -> Self {
        Self { winner_id, loser_id }
    }
}

/// One row of the standings table, derived from the match history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches_played: u32,
}

impl StandingEntry {
    pub fn losses(&self) -> u32 {
        self.matches_played - self.wins
    }
}

/// Two players scheduled to meet in the next round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub first_id: PlayerId,
    pub first_name: String,
    pub second_id: PlayerId,
    pub second_name: String,
}

impl Pairing {
    pub fn ids(&self) -> (PlayerId, PlayerId) {
        (self.first_id, self.second_id)
    }
}

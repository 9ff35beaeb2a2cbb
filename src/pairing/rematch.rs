use std::collections::{HashMap, HashSet};

use crate::domain::{MatchRecord, PlayerId};

/// Who has already faced whom, built once from a match history snapshot
#[derive(Debug, Default, Clone)]
pub struct OpponentHistory {
    faced: HashMap<PlayerId, HashSet<PlayerId>>,
}

impl OpponentHistory {
    pub fn from_matches(matches: &[MatchRecord]) -> Self {
        let mut faced: HashMap<PlayerId, HashSet<PlayerId>> = HashMap::new();

        for record in matches {
            faced.entry(record.winner_id).or_default().insert(record.loser_id);
            faced.entry(record.loser_id).or_default().insert(record.winner_id);
        }

        Self { faced }
    }

    pub fn has_played(&self, a: PlayerId, b: PlayerId) -> bool {
        self.faced.get(&a).is_some_and(|opponents| opponents.contains(&b))
    }

    /// Players in `candidates` that `player_id` may still be paired with.
    ///
    /// Keeps the order of `candidates`; excludes the player and everyone they
    /// have met. An empty result means the player has run out of opponents.
    pub fn remaining_opponents(
        &self,
        player_id: PlayerId,
        candidates: &[PlayerId],
    ) -> Vec<PlayerId> {
        candidates
            .iter()
            .copied()
            .filter(|&candidate| is_eligible(self, player_id, candidate))
            .collect()
    }
}

fn is_eligible(history: &OpponentHistory, player_id: PlayerId, candidate: PlayerId) -> bool {
    candidate != player_id && !history.has_played(player_id, candidate)
}

/// One-shot form of [`OpponentHistory::remaining_opponents`]
pub fn remaining_opponents(
    player_id: PlayerId,
    all_player_ids: &[PlayerId],
    matches: &[MatchRecord],
) -> Vec<PlayerId> {
    OpponentHistory::from_matches(matches).remaining_opponents(player_id, all_player_ids)
}

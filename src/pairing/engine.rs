use std::collections::{HashMap, HashSet};

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use super::backtracking::search_pairs;
use super::rematch::OpponentHistory;
use super::standings::{compute_standings, ranked_ids};
use crate::config::settings::PairingSettings;
use crate::domain::{MatchRecord, Pairing, Player, PlayerId, StandingEntry};
use crate::errors::PairingError;

pub type IdPair = (PlayerId, PlayerId);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PairingStrategy {
    /// Single standings-ordered pass, nearest legal opponent, no backtracking
    #[default]
    Greedy,
    /// Same walk order, but backs up on a dead end
    Backtracking,
}

/// Produces the next round's pairings from a players/matches snapshot
#[derive(Debug, Clone)]
pub struct PairingEngine {
    strategy: PairingStrategy,
    max_backtracks: usize,
}

impl Default for PairingEngine {
    fn default() -> Self {
        Self::new(&PairingSettings::default())
    }
}

impl PairingEngine {
    pub fn new(settings: &PairingSettings) -> Self {
        Self {
            strategy: settings.strategy,
            max_backtracks: settings.max_backtracks,
        }
    }

    pub fn strategy(&self) -> PairingStrategy {
        self.strategy
    }

    /// Pairs every player with an opponent they have not met yet.
    ///
    /// Pairs come out in the order they were formed, the first member being
    /// the higher ranked player. Either every player is paired or an error is
    /// returned; a short list is never produced.
    pub fn pair(
        &self,
        players: &[Player],
        matches: &[MatchRecord],
    ) -> Result<Vec<Pairing>, PairingError> {
        if players.is_empty() {
            return Ok(Vec::new());
        }

        ensure_even_roster(players.len())?;

        let standings = compute_standings(players, matches);
        let ranked = ranked_ids(&standings);
        let history = OpponentHistory::from_matches(matches);

        ensure_opponents_available(&ranked, &history)?;

        let pairs = match self.strategy {
            PairingStrategy::Greedy => greedy_pairs(&ranked, &history)?,
            PairingStrategy::Backtracking => {
                search_pairs(&ranked, &history, self.max_backtracks)?
            }
        };

        debug!(
            "Paired {} players into {} pairs ({:?})",
            ranked.len(),
            pairs.len(),
            self.strategy
        );

        Ok(resolve_pairings(&pairs, &standings))
    }
}

/// Greedy pairings for the next round
pub fn next_round_pairings(
    players: &[Player],
    matches: &[MatchRecord],
) -> Result<Vec<Pairing>, PairingError> {
    PairingEngine::default().pair(players, matches)
}

fn ensure_even_roster(count: usize) -> Result<(), PairingError> {
    if count % 2 == 1 {
        return Err(PairingError::OddRoster { count });
    }
    Ok(())
}

fn ensure_opponents_available(
    ranked: &[PlayerId],
    history: &OpponentHistory,
) -> Result<(), PairingError> {
    for &player_id in ranked {
        if history.remaining_opponents(player_id, ranked).is_empty() {
            return Err(PairingError::OpponentsExhausted { player_id });
        }
    }
    Ok(())
}

fn greedy_pairs(
    ranked: &[PlayerId],
    history: &OpponentHistory,
) -> Result<Vec<IdPair>, PairingError> {
    let mut paired: HashSet<PlayerId> = HashSet::with_capacity(ranked.len());
    let mut pairs = Vec::with_capacity(ranked.len() / 2);

    for &player_id in ranked {
        if paired.contains(&player_id) {
            continue;
        }

        let opponent = first_unpaired(&history.remaining_opponents(player_id, ranked), &paired)
            .ok_or(PairingError::Deadlock { player_id })?;

        paired.insert(player_id);
        paired.insert(opponent);
        pairs.push((player_id, opponent));
    }

    Ok(pairs)
}

fn first_unpaired(candidates: &[PlayerId], paired: &HashSet<PlayerId>) -> Option<PlayerId> {
    candidates
        .iter()
        .copied()
        .find(|candidate| !paired.contains(candidate))
}

fn resolve_pairings(pairs: &[IdPair], standings: &[StandingEntry]) -> Vec<Pairing> {
    let names: HashMap<PlayerId, &str> = standings
        .iter()
        .map(|entry| (entry.id, entry.name.as_str()))
        .collect();

    pairs
        .iter()
        .map(|&(first_id, second_id)| Pairing {
            first_id,
            first_name: names[&first_id].to_string(),
            second_id,
            second_name: names[&second_id].to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(count: i32) -> Vec<Player> {
        (1..=count)
            .map(|id| Player::new(id, format!("Player {id}")))
            .collect()
    }

    fn assert_covers_roster(pairings: &[Pairing], players: &[Player]) {
        assert_eq!(pairings.len() * 2, players.len());
        for player in players {
            let appearances = pairings
                .iter()
                .filter(|p| p.first_id == player.id || p.second_id == player.id)
                .count();
            assert_eq!(appearances, 1, "player {} paired {} times", player.id, appearances);
        }
    }

    fn assert_no_rematches(pairings: &[Pairing], matches: &[MatchRecord]) {
        let history = OpponentHistory::from_matches(matches);
        for pairing in pairings {
            assert!(!history.has_played(pairing.first_id, pairing.second_id));
        }
    }

    #[test]
    fn test_empty_roster_is_not_an_error() {
        let pairings = next_round_pairings(&[], &[]).unwrap();
        assert!(pairings.is_empty());
    }

    #[test]
    fn test_first_round_pairs_neighbours() {
        let players = roster(4);
        let pairings = next_round_pairings(&players, &[]).unwrap();

        assert_covers_roster(&pairings, &players);
        assert_eq!(pairings[0].ids(), (1, 2));
        assert_eq!(pairings[1].ids(), (3, 4));
        assert_eq!(pairings[0].first_name, "Player 1");
        assert_eq!(pairings[0].second_name, "Player 2");
    }

    #[test]
    fn test_even_rosters_are_fully_paired() {
        for count in [2, 6, 10, 16] {
            let players = roster(count);
            let pairings = next_round_pairings(&players, &[]).unwrap();
            assert_covers_roster(&pairings, &players);
        }
    }

    #[test]
    fn test_winners_meet_winners() {
        let players = roster(4);
        let matches = vec![MatchRecord::new(1, 2), MatchRecord::new(3, 4)];

        let pairings = next_round_pairings(&players, &matches).unwrap();

        let ids: Vec<IdPair> = pairings.iter().map(Pairing::ids).collect();
        assert_eq!(ids, vec![(1, 3), (2, 4)]);
        assert_no_rematches(&pairings, &matches);
    }

    #[test]
    fn test_odd_roster_is_rejected() {
        let result = next_round_pairings(&roster(3), &[]);
        assert_eq!(result, Err(PairingError::OddRoster { count: 3 }));
    }

    #[test]
    fn test_exhausted_player_is_reported() {
        let players = roster(4);
        let matches = vec![
            MatchRecord::new(1, 2),
            MatchRecord::new(1, 3),
            MatchRecord::new(4, 1),
        ];

        let result = next_round_pairings(&players, &matches);
        assert_eq!(result, Err(PairingError::OpponentsExhausted { player_id: 1 }));
    }

    #[test]
    fn test_greedy_dead_end_is_reported() {
        // Ranking: 1, 2, 3, 4. 1 takes 2, leaving 3 and 4 who already met.
        let players = roster(4);
        let matches = vec![
            MatchRecord::new(1, 3),
            MatchRecord::new(2, 4),
            MatchRecord::new(3, 4),
        ];

        let result = next_round_pairings(&players, &matches);
        assert_eq!(result, Err(PairingError::Deadlock { player_id: 3 }));
    }

    #[test]
    fn test_backtracking_recovers_from_greedy_dead_end() {
        let players = roster(4);
        let matches = vec![
            MatchRecord::new(1, 3),
            MatchRecord::new(2, 4),
            MatchRecord::new(3, 4),
        ];
        let engine = PairingEngine::new(&PairingSettings {
            strategy: PairingStrategy::Backtracking,
            ..Default::default()
        });

        let pairings = engine.pair(&players, &matches).unwrap();

        let ids: Vec<IdPair> = pairings.iter().map(Pairing::ids).collect();
        assert_eq!(ids, vec![(1, 4), (2, 3)]);
        assert_covers_roster(&pairings, &players);
        assert_no_rematches(&pairings, &matches);
    }

    #[test]
    fn test_strategies_agree_when_greedy_succeeds() {
        let players = roster(8);
        let matches = vec![
            MatchRecord::new(1, 2),
            MatchRecord::new(3, 4),
            MatchRecord::new(5, 6),
            MatchRecord::new(7, 8),
        ];
        let backtracking = PairingEngine::new(&PairingSettings {
            strategy: PairingStrategy::Backtracking,
            ..Default::default()
        });

        assert_eq!(
            next_round_pairings(&players, &matches).unwrap(),
            backtracking.pair(&players, &matches).unwrap()
        );
    }
}

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use swiss_pairing::config::PairingSettings;
use swiss_pairing::database::create_memory_pool;
use swiss_pairing::domain::{MatchRecord, Pairing, PlayerId};
use swiss_pairing::errors::{PairingError, TournamentError};
use swiss_pairing::pairing::PairingStrategy;
use swiss_pairing::registration::register_player;
use swiss_pairing::services::TournamentService;
use swiss_pairing::storage::{MemoryStore, SqliteStore, TournamentStore};

fn played_pairs(matches: &[MatchRecord]) -> HashSet<(PlayerId, PlayerId)> {
    matches
        .iter()
        .map(|m| (m.winner_id.min(m.loser_id), m.winner_id.max(m.loser_id)))
        .collect()
}

fn assert_complete_round(pairings: &[Pairing], roster_size: usize, history: &[MatchRecord]) {
    assert_eq!(pairings.len() * 2, roster_size);

    let previous = played_pairs(history);
    let mut seen = HashSet::new();
    for pairing in pairings {
        assert!(seen.insert(pairing.first_id));
        assert!(seen.insert(pairing.second_id));

        let (a, b) = pairing.ids();
        assert!(!previous.contains(&(a.min(b), a.max(b))), "rematch {a} vs {b}");
    }
}

#[test]
fn first_round_covers_every_even_roster() {
    for size in (2..=20).step_by(2) {
        let names: Vec<String> = (1..=size).map(|i| format!("Player {i}")).collect();
        let service = TournamentService::new(MemoryStore::with_players(&names), &PairingSettings::default());

        let pairings = service.next_round_pairings().unwrap();
        assert_complete_round(&pairings, size, &[]);
    }
}

#[test]
fn rounds_never_repeat_a_matchup() {
    let settings = PairingSettings {
        strategy: PairingStrategy::Backtracking,
        ..Default::default()
    };
    let names: Vec<String> = (1..=8).map(|i| format!("Player {i}")).collect();

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut service = TournamentService::new(MemoryStore::with_players(&names), &settings);

        for _ in 0..7 {
            let history = service.store().list_matches().unwrap();
            let pairings = match service.next_round_pairings() {
                Ok(pairings) => pairings,
                Err(TournamentError::Pairing(_)) => break,
                Err(e) => panic!("unexpected error: {e}"),
            };
            assert_complete_round(&pairings, names.len(), &history);

            for pairing in &pairings {
                let (winner, loser) = if rng.gen_bool(0.5) {
                    pairing.ids()
                } else {
                    (pairing.second_id, pairing.first_id)
                };
                service.report_match(winner, loser).unwrap();
            }
        }
    }
}

#[test]
fn greedy_either_completes_or_fails_whole() {
    let names: Vec<String> = (1..=6).map(|i| format!("Player {i}")).collect();

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut service = TournamentService::new(MemoryStore::with_players(&names), &PairingSettings::default());

        for _ in 0..5 {
            let history = service.store().list_matches().unwrap();
            let pairings = match service.next_round_pairings() {
                Ok(pairings) => pairings,
                Err(err) => {
                    assert!(matches!(err, TournamentError::Pairing(_)));
                    break;
                }
            };
            assert_complete_round(&pairings, names.len(), &history);

            for pairing in &pairings {
                let winner_first = rng.gen_bool(0.5);
                let (winner, loser) = if winner_first {
                    pairing.ids()
                } else {
                    (pairing.second_id, pairing.first_id)
                };
                service.report_match(winner, loser).unwrap();
            }
        }
    }
}

#[test]
fn sqlite_store_runs_the_four_player_scenario() {
    let mut store = SqliteStore::new(create_memory_pool().unwrap()).unwrap();
    for name in ["A", "B", "C", "D"] {
        register_player(&mut store, name).unwrap();
    }
    let mut service = TournamentService::new(store, &PairingSettings::default());

    let first: Vec<_> = service.next_round_pairings().unwrap().iter().map(Pairing::ids).collect();
    assert_eq!(first, vec![(1, 2), (3, 4)]);

    service.report_match(1, 2).unwrap();
    service.report_match(3, 4).unwrap();

    let standings = service.standings().unwrap();
    let ranked: Vec<(PlayerId, u32)> = standings.iter().map(|s| (s.id, s.wins)).collect();
    assert_eq!(ranked, vec![(1, 1), (3, 1), (2, 0), (4, 0)]);

    let second: Vec<_> = service.next_round_pairings().unwrap().iter().map(Pairing::ids).collect();
    assert_eq!(second, vec![(1, 3), (2, 4)]);
}

#[test]
fn player_who_met_everyone_blocks_the_round() {
    let mut service = TournamentService::new(
        MemoryStore::with_players(["A", "B", "C", "D"]),
        &PairingSettings::default(),
    );
    for loser in [2, 3, 4] {
        service.report_match(1, loser).unwrap();
    }

    let err = service.next_round_pairings().unwrap_err();
    assert!(matches!(
        err,
        TournamentError::Pairing(PairingError::OpponentsExhausted { player_id: 1 })
    ));
}

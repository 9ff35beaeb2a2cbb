use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::{MatchRecord, Player, PlayerId, StandingEntry};

#[derive(Debug, Default, Clone, Copy)]
struct Record {
    wins: u32,
    matches_played: u32,
}

/// Ranks players by wins, most wins first.
///
/// Players with equal wins are ordered by ascending id so the ranking (and
/// every pairing derived from it) is deterministic. Only `players` get an
/// entry; ids that appear solely in `matches` are left out.
pub fn compute_standings(players: &[Player], matches: &[MatchRecord]) -> Vec<StandingEntry> {
    let records = tally_records(matches);

    let mut standings: Vec<StandingEntry> = players
        .iter()
        .map(|player| build_entry(player, &records))
        .collect();

    standings.sort_by(compare_entries);
    standings
}

/// Ids in standings order
pub fn ranked_ids(standings: &[StandingEntry]) -> Vec<PlayerId> {
    standings.iter().map(|entry| entry.id).collect()
}

fn tally_records(matches: &[MatchRecord]) -> HashMap<PlayerId, Record> {
    let mut records: HashMap<PlayerId, Record> = HashMap::new();

    for record in matches {
        let winner = records.entry(record.winner_id).or_default();
        winner.wins += 1;
        winner.matches_played += 1;

        records.entry(record.loser_id).or_default().matches_played += 1;
    }

    records
}

fn build_entry(player: &Player, records: &HashMap<PlayerId, Record>) -> StandingEntry {
    let record = records.get(&player.id).copied().unwrap_or_default();

    StandingEntry {
        id: player.id,
        name: player.name.clone(),
        wins: record.wins,
        matches_played: record.matches_played,
    }
}

fn compare_entries(a: &StandingEntry, b: &StandingEntry) -> Ordering {
    b.wins.cmp(&a.wins).then_with(|| a.id.cmp(&b.id))
}

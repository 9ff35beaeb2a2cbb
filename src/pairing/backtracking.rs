use log::debug;

use super::engine::IdPair;
use super::rematch::OpponentHistory;
use crate::domain::PlayerId;
use crate::errors::PairingError;

/// Depth-first search over standings-ordered pairings.
///
/// Candidates are tried in the same order the greedy walk uses, so the first
/// complete pairing found equals the greedy result whenever that succeeds.
pub fn search_pairs(
    ranked: &[PlayerId],
    history: &OpponentHistory,
    max_backtracks: usize,
) -> Result<Vec<IdPair>, PairingError> {
    let mut search = Search::new(ranked, history, max_backtracks);

    if search.extend()? {
        debug!("Pairing search finished after {} backtracks", search.backtracks);
        Ok(search.pairs)
    } else {
        Err(PairingError::NoPerfectPairing)
    }
}

struct Search<'a> {
    ranked: &'a [PlayerId],
    history: &'a OpponentHistory,
    paired: Vec<bool>,
    pairs: Vec<IdPair>,
    backtracks: usize,
    max_backtracks: usize,
}

impl<'a> Search<'a> {
    fn new(ranked: &'a [PlayerId], history: &'a OpponentHistory, max_backtracks: usize) -> Self {
        Self {
            ranked,
            history,
            paired: vec![false; ranked.len()],
            pairs: Vec::with_capacity(ranked.len() / 2),
            backtracks: 0,
            max_backtracks,
        }
    }

    fn extend(&mut self) -> Result<bool, PairingError> {
        let Some(first) = self.first_unpaired() else {
            return Ok(true);
        };

        // Everyone ranked above `first` is already paired.
        for candidate in (first + 1)..self.ranked.len() {
            if !self.can_pair(first, candidate) {
                continue;
            }

            self.pair(first, candidate);
            if self.extend()? {
                return Ok(true);
            }
            self.unpair(first, candidate);
            self.count_backtrack()?;
        }

        Ok(false)
    }

    fn first_unpaired(&self) -> Option<usize> {
        self.paired.iter().position(|&paired| !paired)
    }

    fn can_pair(&self, first: usize, candidate: usize) -> bool {
        !self.paired[candidate]
            && !self
                .history
                .has_played(self.ranked[first], self.ranked[candidate])
    }

    fn pair(&mut self, first: usize, candidate: usize) {
        self.paired[first] = true;
        self.paired[candidate] = true;
        self.pairs.push((self.ranked[first], self.ranked[candidate]));
    }

    fn unpair(&mut self, first: usize, candidate: usize) {
        self.paired[first] = false;
        self.paired[candidate] = false;
        self.pairs.pop();
    }

    fn count_backtrack(&mut self) -> Result<(), PairingError> {
        self.backtracks += 1;
        if self.backtracks > self.max_backtracks {
            return Err(PairingError::SearchLimit {
                limit: self.max_backtracks,
            });
        }
        Ok(())
    }
}

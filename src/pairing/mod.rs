mod backtracking;
pub mod engine;
pub mod rematch;
pub mod standings;

pub use engine::{next_round_pairings, PairingEngine, PairingStrategy};
pub use rematch::{remaining_opponents, OpponentHistory};
pub use standings::{compute_standings, ranked_ids};

pub mod simulation;
pub mod tournament;

pub use simulation::{SimulationReport, SimulationService};
pub use tournament::{Snapshot, TournamentService};

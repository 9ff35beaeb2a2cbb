pub mod settings;

pub use settings::{AppConfig, PairingSettings, SimulationSettings, StorageSettings};

//! Episodes, generations and the map and config they run on.

pub mod config;
pub mod episode;
pub mod error;
pub mod generation;
pub mod layout;
pub mod metrics;

pub use config::SimConfig;
pub use episode::{Episode, EpisodeOutcome, TrainingSummary};
pub use error::{ConfigError, SimulationError};
pub use generation::Simulation;
pub use layout::MapLayout;
pub use metrics::{GenerationMetrics, GenerationReport};

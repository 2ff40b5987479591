use thiserror::Error;

use crate::network::NetworkError;

/// Invalid [`SimConfig`](super::SimConfig) values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Grid size must be at least 1")]
    ZeroGridSize,

    #[error("Grid size {0} is too large: cell count overflows")]
    GridTooLarge(usize),

    #[error("At least one agent is required")]
    NoAgents,

    #[error("Step budget must be at least 1")]
    ZeroMaxSteps,

    #[error("Wall range is inverted: min {min} > max {max}")]
    InvertedWallRange { min: usize, max: usize },

    #[error("Hidden layer {index} has zero neurons")]
    EmptyHiddenLayer { index: usize },

    #[error("Map has {available} open cells but needs {needed} for the target and agents")]
    NoRoom { needed: usize, available: usize },
}

/// Errors surfaced by [`Simulation`](super::Simulation).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid network: {0}")]
    Network(#[from] NetworkError),
}

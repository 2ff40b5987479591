//! hivemind - collective grid search with an online-trained preference network
//!
//! Agents explore a walled grid by least-visited search, breaking ties with
//! a small sigmoid network. Once one agent finds the hidden target, every
//! agent converges on it. After each generation the finder's decisions are
//! replayed into the network, so later generations inherit its preferences.

pub mod agent;
pub mod grid;
pub mod network;
pub mod simulation;

pub use agent::{Agent, DirectionScorer};
pub use grid::{CellKind, Direction, GridState, Position};
pub use network::{Network, NetworkError};
pub use simulation::{Episode, EpisodeOutcome, SimConfig, Simulation, SimulationError};

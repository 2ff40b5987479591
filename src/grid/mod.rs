//! Grid world: cell classification, visit counters and coordinates.

pub mod cell;
pub mod state;
pub mod types;

pub use cell::{AgentId, CellKind};
pub use state::GridState;
pub use types::{Direction, Position};

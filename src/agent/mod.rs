//! Searching agents and their movement policies.

pub mod agent;
pub mod policy;
pub mod trajectory;

pub use agent::Agent;
pub use policy::{DirectionScorer, GATHER_RETRY_LIMIT};
pub use trajectory::{DecisionStep, Trajectory};

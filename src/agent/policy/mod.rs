//! Movement policies: least-visited exploration and greedy gathering.

pub mod explore;
pub mod gather;
pub mod scorer;

pub use explore::choose_exploration_move;
pub use gather::{choose_gathering_move, ideal_step, GATHER_RETRY_LIMIT};
pub use scorer::DirectionScorer;

//! Recorded exploration decisions, replayed as training examples.

use crate::grid::Direction;

/// One exploration decision: the network inputs and the direction taken.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionStep {
    /// `[x/size, y/size, target_x/size, target_y/size]`.
    pub inputs: [f64; 4],
    pub direction: Direction,
}

impl DecisionStep {
    /// Expected network output for this step: one-hot at the chosen direction.
    pub fn expected(&self) -> [f64; 4] {
        self.direction.one_hot()
    }
}

/// Append-only list of decision steps for one agent and one episode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    steps: Vec<DecisionStep>,
}

impl Trajectory {
    /// Creates an empty trajectory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step.
    pub fn push(&mut self, step: DecisionStep) {
        self.steps.push(step);
    }

    /// Returns the number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps in recording order.
    pub fn steps(&self) -> &[DecisionStep] {
        &self.steps
    }

    /// `(inputs, expected)` pairs in recording order.
    pub fn examples(&self) -> impl Iterator<Item = ([f64; 4], [f64; 4])> + '_ {
        self.steps.iter().map(|s| (s.inputs, s.expected()))
    }
}

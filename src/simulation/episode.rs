//! Episode driver: steps every agent until convergence or timeout, then
//! turns the finders' trajectories into training examples.

use log::{debug, trace};
use rand::Rng;

use super::layout::MapLayout;
use crate::agent::{Agent, DirectionScorer};
use crate::grid::{GridState, Position};
use crate::network::Network;

/// How an episode ended. Both variants are normal terminations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EpisodeOutcome {
    /// Every agent stands on the target.
    Converged { steps: u32 },
    /// The step budget ran out first.
    TimedOut { steps: u32 },
}

impl EpisodeOutcome {
    /// Number of steps taken.
    pub fn steps(&self) -> u32 {
        match self {
            EpisodeOutcome::Converged { steps } | EpisodeOutcome::TimedOut { steps } => *steps,
        }
    }

    /// Returns true for [`EpisodeOutcome::Converged`].
    pub fn is_converged(&self) -> bool {
        matches!(self, EpisodeOutcome::Converged { .. })
    }
}

/// Result of replaying finder trajectories into the network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingSummary {
    /// Agents that discovered the target themselves.
    pub finders: usize,
    /// `train` calls made.
    pub examples: usize,
    /// Mean squared error over the replayed examples after training.
    /// `None` when there was nothing to train on.
    pub mean_squared_error: Option<f64>,
}

/// One run of the grid simulation.
///
/// The episode owns the grid and the agents. The discovery broadcast is a
/// single flag: once any agent reaches the target, every agent gathers from
/// the next step on.
#[derive(Debug, Clone)]
pub struct Episode {
    grid: GridState,
    /// Agents in stepping order.
    pub agents: Vec<Agent>,
    target_known: bool,
    target_estimate: Position,
    discovery_step: Option<u32>,
    steps: u32,
    max_steps: u32,
}

impl Episode {
    /// Spawns one agent per entry of `spawns` on `grid`.
    ///
    /// `target_estimate` is what agents are told about the target before it
    /// is discovered.
    pub fn new(
        mut grid: GridState,
        spawns: &[Position],
        target_estimate: Position,
        max_steps: u32,
    ) -> Self {
        let agents = spawns
            .iter()
            .enumerate()
            .map(|(id, &pos)| Agent::spawn(id, pos, &mut grid))
            .collect();
        Self {
            grid,
            agents,
            target_known: false,
            target_estimate,
            discovery_step: None,
            steps: 0,
            max_steps,
        }
    }

    /// Builds an episode from a generated layout.
    pub fn from_layout(
        grid: GridState,
        layout: &MapLayout,
        target_estimate: Position,
        max_steps: u32,
    ) -> Self {
        Self::new(grid, &layout.spawns, target_estimate, max_steps)
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// Consumes the episode, returning its final grid.
    pub fn into_grid(self) -> GridState {
        self.grid
    }

    /// True once any agent has discovered the target.
    pub fn target_known(&self) -> bool {
        self.target_known
    }

    /// Target coordinates handed to agents: the estimate before discovery,
    /// the real target after.
    pub fn target_estimate(&self) -> Position {
        self.target_estimate
    }

    /// Step during which the target was first discovered.
    pub fn discovery_step(&self) -> Option<u32> {
        self.discovery_step
    }

    /// Steps taken so far.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// True when every agent stands on the target.
    pub fn is_converged(&self) -> bool {
        match self.grid.target() {
            Some(target) => {
                !self.agents.is_empty() && self.agents.iter().all(|a| a.position() == target)
            }
            None => false,
        }
    }

    /// Moves every agent once, in order.
    ///
    /// All agents see the flag as it was at the start of the step; a
    /// discovery takes effect from the next step. Returns true if this step
    /// produced the first discovery.
    pub fn step<S, R>(&mut self, scorer: &mut S, rng: &mut R) -> bool
    where
        S: DirectionScorer + ?Sized,
        R: Rng,
    {
        let mut discovered = false;
        for agent in &mut self.agents {
            discovered |= agent.try_move(
                &mut self.grid,
                scorer,
                rng,
                self.target_known,
                self.target_estimate,
            );
        }
        self.steps += 1;

        let first = discovered && !self.target_known;
        if first {
            self.target_known = true;
            self.discovery_step = Some(self.steps);
            if let Some(target) = self.grid.target() {
                self.target_estimate = target;
            }
            debug!(
                "target broadcast at step {} ({})",
                self.steps, self.target_estimate
            );
        }
        trace!("step {}:\n{}", self.steps, self.grid);
        first
    }

    /// Steps until every agent is on the target or the budget is spent.
    pub fn run<S, R>(&mut self, scorer: &mut S, rng: &mut R) -> EpisodeOutcome
    where
        S: DirectionScorer + ?Sized,
        R: Rng,
    {
        loop {
            if self.is_converged() {
                return EpisodeOutcome::Converged { steps: self.steps };
            }
            if self.steps >= self.max_steps {
                return EpisodeOutcome::TimedOut { steps: self.steps };
            }
            self.step(scorer, rng);
        }
    }

    /// Agents whose own move discovered the target.
    pub fn finders(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter().filter(|a| a.found_target())
    }

    /// Trains `network` once per recorded decision of every finder, with a
    /// one-hot target at the chosen direction. Only the agent whose move
    /// first reached the target cell counts as a finder; agents arriving
    /// later in the same step, and agents that only gathered
    /// after the broadcast contribute nothing.
    pub fn train(&self, network: &mut Network) -> TrainingSummary {
        let mut finders = 0;
        let mut examples = 0;
        for agent in self.finders() {
            finders += 1;
            for (inputs, expected) in agent.trajectory().examples() {
                network.train(&inputs, &expected);
                examples += 1;
            }
        }

        let mean_squared_error = if examples > 0 {
            let total: f64 = self
                .finders()
                .flat_map(|a| a.trajectory().examples())
                .map(|(inputs, expected)| network.squared_error(&inputs, &expected))
                .sum();
            Some(total / examples as f64)
        } else {
            None
        };

        debug!(
            "trained on {} examples from {} finder(s), mse {:?}",
            examples, finders, mean_squared_error
        );

        TrainingSummary {
            finders,
            examples,
            mean_squared_error,
        }
    }
}

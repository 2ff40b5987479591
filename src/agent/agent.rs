//! Agent state and the per-step move decision.

use log::debug;
use rand::Rng;

use super::policy::{choose_exploration_move, choose_gathering_move, DirectionScorer};
use super::trajectory::{DecisionStep, Trajectory};
use crate::grid::{AgentId, CellKind, GridState, Position};

/// A single searcher on the grid.
///
/// Agents explore by least-visited search until the target is known, then
/// converge on it. While exploring they record each decision so that a
/// finder's path can later be replayed as training data.
#[derive(Debug, Clone)]
pub struct Agent {
    /// Index of this agent within the episode; also its occupancy marker.
    pub id: AgentId,
    position: Position,
    found_target: bool,
    recording: bool,
    trajectory: Trajectory,
}

impl Agent {
    /// Creates an agent at `position` without touching any grid.
    pub fn new(id: AgentId, position: Position) -> Self {
        Self {
            id,
            position,
            found_target: false,
            recording: true,
            trajectory: Trajectory::new(),
        }
    }

    /// Creates an agent and places it on `grid`.
    ///
    /// The spawn cell shows this agent's marker and counts as one visit.
    pub fn spawn(id: AgentId, position: Position, grid: &mut GridState) -> Self {
        grid.set_cell(position, CellKind::Occupied(id));
        grid.record_visit(position);
        Self::new(id, position)
    }

    /// Current cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// True if this agent's own move discovered the target.
    pub fn found_target(&self) -> bool {
        self.found_target
    }

    /// True while exploration decisions are still being recorded.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Decisions recorded this episode.
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Normalized network inputs: `[x/size, y/size, tx/size, ty/size]`.
    pub fn inputs(&self, grid_size: usize, target: Position) -> [f64; 4] {
        let (x, y) = self.position.normalized(grid_size);
        let (tx, ty) = target.normalized(grid_size);
        [x, y, tx, ty]
    }

    /// Advances this agent by one step.
    ///
    /// With `target_known == false` the agent explores, consulting `scorer`
    /// to break ties between least-visited neighbours and recording the
    /// decision. With `target_known == true` it steps toward `target`; from
    /// then on nothing more is recorded this episode.
    ///
    /// Returns `true` iff this call caused the first discovery: the agent
    /// moved onto a cell still showing `Target` while the target was not yet
    /// globally known. A later arrival in the same step finds the cell
    /// `Gathered` and moves normally.
    pub fn try_move<S, R>(
        &mut self,
        grid: &mut GridState,
        scorer: &mut S,
        rng: &mut R,
        target_known: bool,
        target: Position,
    ) -> bool
    where
        S: DirectionScorer + ?Sized,
        R: Rng,
    {
        let destination = if target_known {
            self.recording = false;
            choose_gathering_move(grid, self.position, target, rng)
        } else {
            let inputs = self.inputs(grid.size(), target);
            let scores = scorer.scores(&inputs);
            match choose_exploration_move(grid, self.position, &scores) {
                Some((direction, destination)) => {
                    if self.recording {
                        self.trajectory.push(DecisionStep { inputs, direction });
                    }
                    destination
                }
                None => self.position,
            }
        };

        if destination == self.position {
            return false;
        }
        self.move_to(grid, destination, target_known)
    }

    fn move_to(&mut self, grid: &mut GridState, destination: Position, target_known: bool) -> bool {
        let discovered = !target_known && grid.cell(destination) == Some(CellKind::Target);

        if grid.cell(self.position) == Some(CellKind::Occupied(self.id)) {
            grid.set_cell(self.position, CellKind::Open);
        }
        self.position = destination;

        if discovered {
            self.found_target = true;
            self.recording = false;
            grid.set_cell(destination, CellKind::Gathered);
            debug!(
                "agent {} discovered the target at {} after {} recorded steps",
                self.id,
                destination,
                self.trajectory.len()
            );
            return true;
        }

        grid.record_visit(destination);
        let marker = if grid.cell(destination).is_some_and(|c| c.is_target()) {
            CellKind::Gathered
        } else {
            CellKind::Occupied(self.id)
        };
        grid.set_cell(destination, marker);
        false
    }
}

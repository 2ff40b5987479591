//! Random map generation: walls, the target and agent spawn cells.

use rand::Rng;

use super::config::SimConfig;
use super::error::ConfigError;
use crate::grid::{CellKind, GridState, Position};

/// Where the target and the agents were placed on a freshly generated map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapLayout {
    pub target: Position,
    /// One spawn cell per agent, all distinct.
    pub spawns: Vec<Position>,
}

impl MapLayout {
    /// Resets `grid` and populates it for a new generation.
    ///
    /// Wall placements are drawn independently, so two walls may land on the
    /// same cell. The target and every spawn cell are then drawn from the
    /// remaining open cells without repetition. Agents are not placed on the
    /// grid here; see [`Agent::spawn`](crate::agent::Agent::spawn).
    ///
    /// # Errors
    ///
    /// Returns the [`SimConfig::validate`] error for an invalid config, and
    /// [`ConfigError::NoRoom`] when the walls leave fewer open cells than the
    /// target and agents need.
    pub fn generate<R: Rng>(
        grid: &mut GridState,
        config: &SimConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        *grid = GridState::new(config.grid_size);

        let n_walls = rng.gen_range(config.min_walls..=config.max_walls);
        for _ in 0..n_walls {
            let pos = Position::new(
                rng.gen_range(0..config.grid_size),
                rng.gen_range(0..config.grid_size),
            );
            grid.set_cell(pos, CellKind::Wall);
        }

        let mut open = grid.positions_of(CellKind::Open);
        let needed = config.n_agents + 1;
        if open.len() < needed {
            return Err(ConfigError::NoRoom {
                needed,
                available: open.len(),
            });
        }

        let target = open.swap_remove(rng.gen_range(0..open.len()));
        grid.set_cell(target, CellKind::Target);

        let spawns = (0..config.n_agents)
            .map(|_| open.swap_remove(rng.gen_range(0..open.len())))
            .collect();

        Ok(Self { target, spawns })
    }
}

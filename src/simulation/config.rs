//! Configuration for map generation, episodes and the preference network.

use super::error::ConfigError;
use crate::grid::Direction;

/// Simulation configuration.
///
/// Controls the grid, the population, the per-episode step budget and the
/// hidden layers of the preference network.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    // --- Map ---
    /// Side length of the square grid.
    pub grid_size: usize,
    /// Number of agents spawned per generation.
    pub n_agents: usize,
    /// Inclusive range for the number of wall placements per map.
    pub min_walls: usize,
    pub max_walls: usize,

    // --- Episode ---
    /// Steps before an episode times out.
    pub max_steps: u32,

    // --- Network ---
    /// Hidden layer widths between the input and output layers.
    pub hidden_layers: Vec<usize>,

    /// Seed for map generation, network initialization and gathering fallback.
    pub seed: u64,
}

impl SimConfig {
    /// Number of network inputs: agent x, y and target x, y.
    pub const INPUT_DIM: usize = 4;

    /// Network topology `[INPUT_DIM, hidden..., Direction::COUNT]`.
    pub fn topology(&self) -> Vec<usize> {
        let mut topology = Vec::with_capacity(self.hidden_layers.len() + 2);
        topology.push(Self::INPUT_DIM);
        topology.extend_from_slice(&self.hidden_layers);
        topology.push(Direction::COUNT);
        topology
    }

    /// Checks the values that would otherwise fail later or loop forever.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if self.n_agents == 0 {
            return Err(ConfigError::NoAgents);
        }
        if self.max_steps == 0 {
            return Err(ConfigError::ZeroMaxSteps);
        }
        if self.min_walls > self.max_walls {
            return Err(ConfigError::InvertedWallRange {
                min: self.min_walls,
                max: self.max_walls,
            });
        }
        if let Some(index) = self.hidden_layers.iter().position(|&n| n == 0) {
            return Err(ConfigError::EmptyHiddenLayer { index });
        }
        let cells = self
            .grid_size
            .checked_mul(self.grid_size)
            .ok_or(ConfigError::GridTooLarge(self.grid_size))?;
        let needed = self.n_agents.saturating_add(1);
        if cells < needed {
            return Err(ConfigError::NoRoom {
                needed,
                available: cells,
            });
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            n_agents: 5,
            min_walls: 21,
            max_walls: 30,
            max_steps: 200,
            hidden_layers: vec![8],
            seed: 42,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.grid_size, 10);
        assert_eq!(cfg.n_agents, 5);
    }

    #[test]
    fn topology_wraps_hidden_layers() {
        let cfg = SimConfig {
            hidden_layers: vec![6, 5],
            ..SimConfig::default()
        };
        assert_eq!(cfg.topology(), vec![4, 6, 5, 4]);

        let flat = SimConfig {
            hidden_layers: vec![],
            ..SimConfig::default()
        };
        assert_eq!(flat.topology(), vec![4, 4]);
    }

    #[test]
    fn rejects_invalid_values() {
        let base = SimConfig::default();
        let cases = [
            (
                SimConfig {
                    grid_size: 0,
                    ..base.clone()
                },
                ConfigError::ZeroGridSize,
            ),
            (
                SimConfig {
                    n_agents: 0,
                    ..base.clone()
                },
                ConfigError::NoAgents,
            ),
            (
                SimConfig {
                    max_steps: 0,
                    ..base.clone()
                },
                ConfigError::ZeroMaxSteps,
            ),
            (
                SimConfig {
                    min_walls: 5,
                    max_walls: 2,
                    ..base.clone()
                },
                ConfigError::InvertedWallRange { min: 5, max: 2 },
            ),
            (
                SimConfig {
                    hidden_layers: vec![3, 0],
                    ..base.clone()
                },
                ConfigError::EmptyHiddenLayer { index: 1 },
            ),
            (
                SimConfig {
                    grid_size: 2,
                    n_agents: 4,
                    ..base.clone()
                },
                ConfigError::NoRoom {
                    needed: 5,
                    available: 4,
                },
            ),
            (
                SimConfig {
                    grid_size: usize::MAX,
                    ..base.clone()
                },
                ConfigError::GridTooLarge(usize::MAX),
            ),
        ];
        for (cfg, expected) in cases {
            assert_eq!(cfg.validate(), Err(expected));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_from_partial_json() {
        let cfg: SimConfig = serde_json::from_str(r#"{"n_agents": 3, "seed": 7}"#).unwrap();
        assert_eq!(cfg.n_agents, 3);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.grid_size, 10);
    }
}

//! Multi-generation driver: one network learning across fresh maps.

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::SimConfig;
use super::episode::Episode;
use super::error::SimulationError;
use super::layout::MapLayout;
use super::metrics::{GenerationMetrics, GenerationReport};
use crate::grid::{GridState, Position};
use crate::network::Network;

/// Owns the learned state of a run.
///
/// # Lifecycle
///
/// 1. [`Simulation::new`] validates the config and builds the network.
/// 2. Each [`Simulation::run_generation`] generates a map, runs an episode
///    with the current network, then trains it on the finders' decisions.
/// 3. The network carries over between generations; nothing is persisted.
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    network: Network,
    rng: StdRng,
    grid: GridState,
    target_estimate: Position,
    generation: u32,
}

impl Simulation {
    /// Creates a simulation from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Config`] for an invalid config.
    pub fn new(config: SimConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let network = Network::new(&config.topology(), &mut rng)?;
        let center = config.grid_size / 2;
        Ok(Self {
            grid: GridState::new(config.grid_size),
            target_estimate: Position::new(center, center),
            config,
            network,
            rng,
            generation: 0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Final grid of the most recent generation.
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// Target coordinates agents will explore with next generation: the last
    /// discovered target, or the grid centre before any discovery.
    pub fn target_estimate(&self) -> Position {
        self.target_estimate
    }

    /// Number of generations completed.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Runs one generation: new map, episode, training.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Config`] if the walls leave no room for
    /// the target and agents.
    pub fn run_generation(&mut self) -> Result<GenerationReport, SimulationError> {
        let layout = MapLayout::generate(&mut self.grid, &self.config, &mut self.rng)?;
        let grid = std::mem::replace(&mut self.grid, GridState::new(0));
        let mut episode = Episode::from_layout(
            grid,
            &layout,
            self.target_estimate,
            self.config.max_steps,
        );

        let outcome = episode.run(&mut self.network, &mut self.rng);
        let summary = episode.train(&mut self.network);
        if episode.target_known() {
            self.target_estimate = layout.target;
        }

        let report = GenerationReport {
            generation: self.generation,
            outcome,
            discovery_step: episode.discovery_step(),
            finders: summary.finders,
            examples: summary.examples,
            mean_squared_error: summary.mean_squared_error,
        };
        self.grid = episode.into_grid();

        info!(
            "generation {}: {:?}, discovery at {:?}, {} finder(s), {} example(s)",
            report.generation,
            report.outcome,
            report.discovery_step,
            report.finders,
            report.examples
        );
        self.generation += 1;
        Ok(report)
    }

    /// Runs `n` generations and aggregates their reports.
    ///
    /// # Errors
    ///
    /// Stops at the first failing generation and returns its error; reports
    /// of the generations completed before it are discarded, although their
    /// training has already been applied to the network. Call
    /// [`Simulation::run_generation`] directly to keep partial results.
    pub fn run(&mut self, n: usize) -> Result<GenerationMetrics, SimulationError> {
        let reports = (0..n)
            .map(|_| self.run_generation())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GenerationMetrics::from_reports(reports))
    }
}

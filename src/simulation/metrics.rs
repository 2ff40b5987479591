//! Per-generation reports and their aggregate over a run.

use std::fmt;

use super::episode::EpisodeOutcome;

/// What happened in one generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationReport {
    /// Zero-based generation index.
    pub generation: u32,
    pub outcome: EpisodeOutcome,
    /// Step at which the target was first discovered, if it was.
    pub discovery_step: Option<u32>,
    /// Agents that discovered the target themselves.
    pub finders: usize,
    /// Training examples replayed into the network after the episode.
    pub examples: usize,
    /// Mean squared error over those examples after training.
    pub mean_squared_error: Option<f64>,
}

/// Aggregated metrics over several generations.
#[derive(Debug, Clone)]
pub struct GenerationMetrics {
    /// Number of generations run.
    pub n_generations: usize,
    /// Generations in which every agent reached the target.
    pub converged: usize,
    /// Mean steps per generation, timeouts included.
    pub mean_steps: f64,
    /// Mean discovery step over generations where the target was found.
    pub mean_discovery_step: Option<f64>,
    /// Total training examples across all generations.
    pub total_examples: usize,
    /// Training error of the last generation that trained.
    pub last_error: Option<f64>,
    /// Individual reports in generation order.
    pub reports: Vec<GenerationReport>,
}

impl GenerationMetrics {
    /// Aggregates `reports`.
    pub fn from_reports(reports: Vec<GenerationReport>) -> Self {
        let n = reports.len();
        let converged = reports.iter().filter(|r| r.outcome.is_converged()).count();
        let mean_steps = if n > 0 {
            reports
                .iter()
                .map(|r| r.outcome.steps() as f64)
                .sum::<f64>()
                / n as f64
        } else {
            0.0
        };

        let discoveries: Vec<f64> = reports
            .iter()
            .filter_map(|r| r.discovery_step.map(f64::from))
            .collect();
        let mean_discovery_step = if discoveries.is_empty() {
            None
        } else {
            Some(discoveries.iter().sum::<f64>() / discoveries.len() as f64)
        };

        let total_examples = reports.iter().map(|r| r.examples).sum();
        let last_error = reports.iter().rev().find_map(|r| r.mean_squared_error);

        Self {
            n_generations: n,
            converged,
            mean_steps,
            mean_discovery_step,
            total_examples,
            last_error,
            reports,
        }
    }

    /// Share of generations that converged, in percent.
    pub fn success_rate(&self) -> f64 {
        if self.n_generations == 0 {
            0.0
        } else {
            self.converged as f64 / self.n_generations as f64 * 100.0
        }
    }
}

impl fmt::Display for GenerationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== Generation Metrics ({} generations) ===",
            self.n_generations
        )?;
        writeln!(
            f,
            "  Converged:               {} ({:.1}%)",
            self.converged,
            self.success_rate()
        )?;
        writeln!(f, "  Mean steps:              {:.1}", self.mean_steps)?;
        match self.mean_discovery_step {
            Some(s) => writeln!(f, "  Mean discovery step:     {:.1}", s)?,
            None => writeln!(f, "  Mean discovery step:     -")?,
        }
        writeln!(f, "  Training examples:       {}", self.total_examples)?;
        match self.last_error {
            Some(e) => write!(f, "  Last training error:     {:.4}", e),
            None => write!(f, "  Last training error:     -"),
        }
    }
}

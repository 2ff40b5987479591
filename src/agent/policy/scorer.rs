//! Scoring trait consulted by agents during exploration.

use crate::network::Network;

/// Produces one preference score per [`Direction`](crate::grid::Direction)
/// for a normalized input vector.
///
/// Scores only break ties between equally-unvisited neighbours; they never
/// override the visit-count rule.
pub trait DirectionScorer {
    /// Returns scores indexed by direction (0=Up, 1=Down, 2=Left, 3=Right).
    fn scores(&mut self, inputs: &[f64]) -> Vec<f64>;

    /// Returns a human-readable name for this scorer.
    fn name(&self) -> &str;
}

impl DirectionScorer for Network {
    fn scores(&mut self, inputs: &[f64]) -> Vec<f64> {
        self.predict(inputs)
    }

    fn name(&self) -> &str {
        "network"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn network_scores_match_predict() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut net = Network::new(&[4, 6, 4], &mut rng).unwrap();
        let inputs = [0.1, 0.2, 0.3, 0.4];
        let expected = net.predict(&inputs);
        let scorer: &mut dyn DirectionScorer = &mut net;
        assert_eq!(scorer.scores(&inputs), expected);
        assert_eq!(scorer.name(), "network");
    }
}

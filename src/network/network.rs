//! Feedforward network with single-example backpropagation.

use rand::Rng;

use super::error::NetworkError;
use super::layer::Layer;

/// Learning rate used by [`Network::train`] for the network's lifetime.
pub const LEARNING_RATE: f64 = 0.5;

/// Fully-connected sigmoid network.
///
/// The topology is fixed at construction; training only mutates weights,
/// biases and the per-neuron caches. There is no reset: learning accumulates
/// across every [`Network::train`] call until the network is dropped.
///
/// # Example
///
/// ```
/// use hivemind::network::Network;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let mut net = Network::new(&[4, 8, 4], &mut rng).unwrap();
/// let before = net.squared_error(&[0.1, 0.2, 0.5, 0.5], &[0.0, 1.0, 0.0, 0.0]);
/// for _ in 0..100 {
///     net.train(&[0.1, 0.2, 0.5, 0.5], &[0.0, 1.0, 0.0, 0.0]);
/// }
/// assert!(net.squared_error(&[0.1, 0.2, 0.5, 0.5], &[0.0, 1.0, 0.0, 0.0]) < before);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    layers: Vec<Layer>,
    topology: Vec<usize>,
}

impl Network {
    /// Builds a network from a topology `[inputs, layer_1, ..., layer_n]`.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::TopologyTooShort`] for fewer than two entries
    /// and [`NetworkError::EmptyLayer`] if any entry is zero.
    pub fn new<R: Rng>(topology: &[usize], rng: &mut R) -> Result<Self, NetworkError> {
        if topology.len() < 2 {
            return Err(NetworkError::TopologyTooShort(topology.len()));
        }
        if let Some(index) = topology.iter().position(|&n| n == 0) {
            return Err(NetworkError::EmptyLayer { index });
        }

        let layers = topology
            .windows(2)
            .map(|pair| Layer::new(pair[0], pair[1], rng))
            .collect();

        Ok(Self {
            layers,
            topology: topology.to_vec(),
        })
    }

    /// The topology this network was built from.
    pub fn topology(&self) -> &[usize] {
        &self.topology
    }

    /// Expected length of the input vector.
    pub fn input_size(&self) -> usize {
        self.topology[0]
    }

    /// Length of the output vector.
    pub fn output_size(&self) -> usize {
        self.topology[self.topology.len() - 1]
    }

    /// Layers in forward order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Forward pass. Caches every neuron's output for a following
    /// [`Network::train`].
    ///
    /// # Panics
    ///
    /// Panics if `inputs.len()` differs from [`Network::input_size`].
    pub fn predict(&mut self, inputs: &[f64]) -> Vec<f64> {
        assert_eq!(
            inputs.len(),
            self.input_size(),
            "Input length must match the network's input size"
        );

        let mut signal = inputs.to_vec();
        for layer in &mut self.layers {
            signal = layer.forward(&signal);
        }
        signal
    }

    /// One backpropagation step on a single `(inputs, expected)` example.
    ///
    /// # Panics
    ///
    /// Panics if either vector does not match the topology.
    pub fn train(&mut self, inputs: &[f64], expected: &[f64]) {
        assert_eq!(
            expected.len(),
            self.output_size(),
            "Expected length must match the network's output size"
        );
        self.predict(inputs);

        let last = self.layers.len() - 1;
        self.layers[last].set_output_deltas(expected);
        for i in (0..last).rev() {
            let (head, tail) = self.layers.split_at_mut(i + 1);
            head[i].set_hidden_deltas(&tail[0]);
        }

        // Deltas are all set before any weight moves.
        let mut layer_inputs = inputs.to_vec();
        for layer in &mut self.layers {
            let outputs = layer.outputs();
            layer.update(&layer_inputs, LEARNING_RATE);
            layer_inputs = outputs;
        }
    }

    /// Sum of squared differences between `predict(inputs)` and `expected`.
    pub fn squared_error(&mut self, inputs: &[f64], expected: &[f64]) -> f64 {
        self.predict(inputs)
            .iter()
            .zip(expected)
            .map(|(o, e)| (e - o).powi(2))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_net(topology: &[usize]) -> Network {
        let mut rng = StdRng::seed_from_u64(42);
        Network::new(topology, &mut rng).unwrap()
    }

    #[test]
    fn rejects_short_topology() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            Network::new(&[4], &mut rng),
            Err(NetworkError::TopologyTooShort(1))
        );
        assert_eq!(
            Network::new(&[], &mut rng),
            Err(NetworkError::TopologyTooShort(0))
        );
    }

    #[test]
    fn rejects_empty_layer() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            Network::new(&[4, 0, 4], &mut rng),
            Err(NetworkError::EmptyLayer { index: 1 })
        );
    }

    #[test]
    fn layers_chain_topology() {
        let net = make_net(&[4, 6, 3, 4]);
        assert_eq!(net.layers().len(), 3);
        assert_eq!(net.layers()[0].n_inputs(), 4);
        assert_eq!(net.layers()[1].n_inputs(), 6);
        assert_eq!(net.layers()[2].n_inputs(), 3);
        assert_eq!(net.output_size(), 4);
    }

    #[test]
    fn predict_is_deterministic() {
        let mut net = make_net(&[4, 8, 4]);
        let inputs = [0.3, 0.7, 0.5, 0.5];
        let a = net.predict(&inputs);
        let b = net.predict(&inputs);
        assert_eq!(a.len(), 4);
        assert_eq!(a, b);
    }

    #[test]
    fn outputs_in_open_unit_interval() {
        let mut net = make_net(&[4, 8, 4]);
        for inputs in [
            [0.0, 0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0, 1.0],
            [-5.0, 3.0, 12.0, -0.25],
            [0.9, 0.1, 0.5, 0.5],
        ] {
            for o in net.predict(&inputs) {
                assert!(o > 0.0 && o < 1.0, "output {o} outside (0, 1)");
            }
        }
    }

    #[test]
    fn repeated_training_reduces_error() {
        let mut net = make_net(&[4, 8, 4]);
        let inputs = [0.2, 0.4, 0.5, 0.5];
        let expected = Direction::Left.one_hot();

        let mut errors = Vec::new();
        for _ in 0..60 {
            errors.push(net.squared_error(&inputs, &expected));
            net.train(&inputs, &expected);
        }
        let final_error = net.squared_error(&inputs, &expected);

        assert!(final_error < errors[0]);
        let decreasing = errors.windows(2).filter(|w| w[1] < w[0]).count();
        assert!(decreasing * 2 > errors.len() - 1);

        let first_half: f64 = errors[..30].iter().sum::<f64>() / 30.0;
        let second_half: f64 = errors[30..].iter().sum::<f64>() / 30.0;
        assert!(second_half < first_half);
    }

    #[test]
    fn training_moves_prediction_toward_target() {
        let mut net = make_net(&[4, 5, 4]);
        let inputs = [0.1, 0.9, 0.3, 0.3];
        let expected = Direction::Down.one_hot();
        for _ in 0..500 {
            net.train(&inputs, &expected);
        }
        let out = net.predict(&inputs);
        let best = out
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i);
        assert_eq!(best, Some(Direction::Down.index()));
    }

    #[test]
    fn single_layer_network_trains() {
        let mut net = make_net(&[2, 1]);
        let before = net.squared_error(&[1.0, 0.0], &[1.0]);
        for _ in 0..100 {
            net.train(&[1.0, 0.0], &[1.0]);
        }
        assert!(net.squared_error(&[1.0, 0.0], &[1.0]) < before);
    }

    #[test]
    #[should_panic(expected = "Input length")]
    fn predict_rejects_wrong_arity() {
        let mut net = make_net(&[4, 4]);
        net.predict(&[0.0, 0.0]);
    }
}

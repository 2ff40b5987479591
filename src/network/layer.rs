//! A fully-connected layer of sigmoid neurons.

use rand::Rng;

use super::neuron::Neuron;

/// Neurons sharing one input arity.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub neurons: Vec<Neuron>,
    n_inputs: usize,
}

impl Layer {
    /// Creates a layer of `n_neurons` randomly initialized neurons.
    pub fn new<R: Rng>(n_inputs: usize, n_neurons: usize, rng: &mut R) -> Self {
        Self {
            neurons: (0..n_neurons).map(|_| Neuron::new(n_inputs, rng)).collect(),
            n_inputs,
        }
    }

    /// Input arity of every neuron in this layer.
    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    /// Number of neurons (the layer's output width).
    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    /// Returns true if the layer has no neurons.
    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// Runs every neuron on `inputs` and returns their outputs.
    pub fn forward(&mut self, inputs: &[f64]) -> Vec<f64> {
        self.neurons.iter_mut().map(|n| n.activate(inputs)).collect()
    }

    /// Cached outputs of the most recent forward pass.
    pub fn outputs(&self) -> Vec<f64> {
        self.neurons.iter().map(|n| n.output).collect()
    }

    /// Sets output-layer deltas: `(expected - out)·out·(1 - out)`.
    pub fn set_output_deltas(&mut self, expected: &[f64]) {
        for (n, e) in self.neurons.iter_mut().zip(expected) {
            n.delta = (e - n.output) * n.output_slope();
        }
    }

    /// Sets hidden-layer deltas from the layer that consumes this one.
    ///
    /// Neuron `i` receives `Σⱼ next.w[j][i]·next.δ[j]` scaled by its slope.
    pub fn set_hidden_deltas(&mut self, next: &Layer) {
        for (i, n) in self.neurons.iter_mut().enumerate() {
            let error: f64 = next
                .neurons
                .iter()
                .map(|m| m.weights[i] * m.delta)
                .sum();
            n.delta = error * n.output_slope();
        }
    }

    /// Applies the weight update to every neuron.
    pub fn update(&mut self, inputs: &[f64], learning_rate: f64) {
        for n in &mut self.neurons {
            n.update(inputs, learning_rate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::neuron::sigmoid;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn forward_width_matches_neurons() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut layer = Layer::new(3, 5, &mut rng);
        assert_eq!(layer.n_inputs(), 3);
        assert_eq!(layer.len(), 5);
        let out = layer.forward(&[0.1, 0.2, 0.3]);
        assert_eq!(out.len(), 5);
        assert_eq!(out, layer.outputs());
    }

    #[test]
    fn hidden_deltas_use_transposed_weights() {
        let mut hidden = Layer {
            neurons: vec![
                Neuron::with_params(vec![0.0], 0.0),
                Neuron::with_params(vec![0.0], 0.0),
            ],
            n_inputs: 1,
        };
        hidden.forward(&[0.0]);

        let mut next = Layer {
            neurons: vec![Neuron::with_params(vec![2.0, -1.0], 0.0)],
            n_inputs: 2,
        };
        next.neurons[0].delta = 0.5;

        hidden.set_hidden_deltas(&next);
        let slope = sigmoid(0.0) * (1.0 - sigmoid(0.0));
        assert!((hidden.neurons[0].delta - 1.0 * slope).abs() < 1e-12);
        assert!((hidden.neurons[1].delta + 0.5 * slope).abs() < 1e-12);
    }
}

//! A single sigmoid unit.

use rand::Rng;

/// Logistic activation.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid unit with its cached forward output and training delta.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    /// One weight per input.
    pub weights: Vec<f64>,
    pub bias: f64,
    /// Output of the most recent forward pass.
    pub output: f64,
    /// Backpropagated error signal of the most recent training step.
    pub delta: f64,
}

impl Neuron {
    /// Creates a neuron with weights and bias drawn from `[-0.5, 0.5)`.
    pub fn new<R: Rng>(n_inputs: usize, rng: &mut R) -> Self {
        Self {
            weights: (0..n_inputs).map(|_| rng.gen_range(-0.5..0.5)).collect(),
            bias: rng.gen_range(-0.5..0.5),
            output: 0.0,
            delta: 0.0,
        }
    }

    /// Creates a neuron with explicit parameters.
    pub fn with_params(weights: Vec<f64>, bias: f64) -> Self {
        Self {
            weights,
            bias,
            output: 0.0,
            delta: 0.0,
        }
    }

    /// Computes and caches `sigmoid(bias + Σ wᵢ·xᵢ)`.
    pub fn activate(&mut self, inputs: &[f64]) -> f64 {
        let sum: f64 = self
            .weights
            .iter()
            .zip(inputs)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.bias;
        self.output = sigmoid(sum);
        self.output
    }

    /// Derivative of the sigmoid at the cached output.
    pub fn output_slope(&self) -> f64 {
        self.output * (1.0 - self.output)
    }

    /// Applies `w += lr·δ·x` to every weight and `b += lr·δ` to the bias.
    pub fn update(&mut self, inputs: &[f64], learning_rate: f64) {
        let step = learning_rate * self.delta;
        for (w, x) in self.weights.iter_mut().zip(inputs) {
            *w += step * x;
        }
        self.bias += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sigmoid_midpoint() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert!(sigmoid(10.0) > 0.99);
        assert!(sigmoid(-10.0) < 0.01);
    }

    #[test]
    fn random_init_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let n = Neuron::new(6, &mut rng);
            assert_eq!(n.weights.len(), 6);
            assert!(n.weights.iter().all(|w| (-0.5..0.5).contains(w)));
            assert!((-0.5..0.5).contains(&n.bias));
        }
    }

    #[test]
    fn activate_caches_output() {
        let mut n = Neuron::with_params(vec![1.0, -1.0], 0.5);
        let out = n.activate(&[2.0, 1.0]);
        assert!((out - sigmoid(1.5)).abs() < 1e-12);
        assert_eq!(n.output, out);
    }

    #[test]
    fn update_moves_along_delta() {
        let mut n = Neuron::with_params(vec![0.0, 0.0], 0.0);
        n.delta = 0.2;
        n.update(&[1.0, 0.5], 0.5);
        assert!((n.weights[0] - 0.1).abs() < 1e-12);
        assert!((n.weights[1] - 0.05).abs() < 1e-12);
        assert!((n.bias - 0.1).abs() < 1e-12);
    }
}

use thiserror::Error;

/// Errors raised while building a [`Network`](super::Network).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Topology needs an input size and at least one layer, got {0} entries")]
    TopologyTooShort(usize),

    #[error("Topology entry {index} is zero; every layer needs at least one neuron")]
    EmptyLayer { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topology_too_short_display() {
        let e = NetworkError::TopologyTooShort(1);
        assert_eq!(
            e.to_string(),
            "Topology needs an input size and at least one layer, got 1 entries"
        );
    }

    #[test]
    fn empty_layer_display() {
        let e = NetworkError::EmptyLayer { index: 2 };
        assert!(e.to_string().contains("entry 2 is zero"));
    }
}

//! Feedforward sigmoid network trained online by backpropagation.

pub mod error;
pub mod layer;
pub mod network;
pub mod neuron;

pub use error::NetworkError;
pub use layer::Layer;
pub use network::{Network, LEARNING_RATE};
pub use neuron::{sigmoid, Neuron};

pub mod math;
pub mod activation;
pub mod sample;
pub mod network;
pub mod loss;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::strategy::{ActivationKind, ActivationStrategy, Sigmoid, Tanh};
pub use sample::sampler::{RandomSampler, Sampler};
pub use network::network::{Network, TrainItem, DEFAULT_LEARNING_RATE};
pub use network::spec::NetworkSpec;
pub use loss::mse::MseLoss;
pub use error::{NetworkError, Result};

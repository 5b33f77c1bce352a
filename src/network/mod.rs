pub mod network;
pub mod spec;

pub use network::{Network, TrainItem, DEFAULT_LEARNING_RATE};
pub use spec::NetworkSpec;

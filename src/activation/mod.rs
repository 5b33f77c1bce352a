pub mod strategy;

pub use strategy::{ActivationKind, ActivationStrategy, Sigmoid, Tanh};

pub mod sampler;

pub use sampler::{RandomSampler, Sampler};

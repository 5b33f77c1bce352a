use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Discrete uniform index selection over `[low, high)`, with replacement.
///
/// Injected into the network instead of an ambient thread-local generator so
/// training runs can be made deterministic (see `RandomSampler::seeded`).
pub trait Sampler {
    fn uniform_index(&mut self, low: usize, high: usize) -> usize;
}

/// The default sampler, backed by `rand::rngs::StdRng`.
pub struct RandomSampler {
    rng: StdRng,
}

impl RandomSampler {
    pub fn new() -> RandomSampler {
        RandomSampler {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> RandomSampler {
        RandomSampler {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        RandomSampler::new()
    }
}

impl Sampler for RandomSampler {
    fn uniform_index(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..high)
    }
}
